mod logger;

pub use logger::StartupLogger;
