//! Built-in external command table
//!
//! Field order here is the wire order the monitoring core expects for each
//! keyword. Reordering an entry changes the protocol.

use super::types::{CommandSchema, FieldSpec, Validator};

const HOSTNAME: FieldSpec = FieldSpec::text("Hostname")
    .required()
    .validate(Validator::Identifier);

const SERVICE_DESCRIPTION: FieldSpec = FieldSpec::text("ServiceDescription")
    .aliases(&["Service"])
    .required()
    .validate(Validator::Identifier);

const SERVICE: FieldSpec = FieldSpec::text("Service")
    .aliases(&["ServiceDescription"])
    .required()
    .validate(Validator::Identifier);

const HOSTGROUP: FieldSpec = FieldSpec::text("Hostgroup")
    .required()
    .validate(Validator::Identifier);

const COMMENT_ID: FieldSpec = FieldSpec::id("CommentID")
    .required()
    .validate(Validator::Identifier);

const STICKY: FieldSpec = FieldSpec::flag("Sticky", 2);
const NOTIFY: FieldSpec = FieldSpec::flag("Notify", 1);
const PERSISTENT: FieldSpec = FieldSpec::flag("Persistent", 1);

const AUTHOR: FieldSpec = FieldSpec::text("Author").required();
const OPTIONAL_AUTHOR: FieldSpec = FieldSpec::text("Author");
const COMMENT: FieldSpec = FieldSpec::text("Comment");
const REQUIRED_COMMENT: FieldSpec = FieldSpec::text("Comment").required();

const CHECK_TIME: FieldSpec = FieldSpec::current_time("check_time");

const HOST_ONLY: &[FieldSpec] = &[HOSTNAME];
const HOSTGROUP_ONLY: &[FieldSpec] = &[HOSTGROUP];
const COMMENT_ID_ONLY: &[FieldSpec] = &[COMMENT_ID];
const HOST_CHECK_TIME: &[FieldSpec] = &[HOSTNAME, CHECK_TIME];

/// Every command kind the gateway accepts
pub const COMMANDS: &[CommandSchema] = &[
    CommandSchema {
        name: "ACKNOWLEDGE_HOST_PROBLEM",
        description: "Acknowledge the current problem on a host",
        fields: &[HOSTNAME, STICKY, NOTIFY, PERSISTENT, AUTHOR, COMMENT],
    },
    CommandSchema {
        name: "ACKNOWLEDGE_SVC_PROBLEM",
        description: "Acknowledge the current problem on a service",
        fields: &[
            HOSTNAME,
            SERVICE_DESCRIPTION,
            STICKY,
            NOTIFY,
            PERSISTENT,
            OPTIONAL_AUTHOR,
            COMMENT,
        ],
    },
    CommandSchema {
        name: "ADD_HOST_COMMENT",
        description: "Add a comment to a host",
        fields: &[HOSTNAME, PERSISTENT, AUTHOR, REQUIRED_COMMENT],
    },
    CommandSchema {
        name: "ADD_SVC_COMMENT",
        description: "Add a comment to a service",
        fields: &[HOSTNAME, SERVICE, PERSISTENT, AUTHOR, REQUIRED_COMMENT],
    },
    CommandSchema {
        name: "DEL_ALL_HOST_COMMENTS",
        description: "Delete all comments on a host",
        fields: HOST_ONLY,
    },
    CommandSchema {
        name: "DEL_ALL_SVC_COMMENTS",
        description: "Delete all service comments on a host",
        fields: HOST_ONLY,
    },
    CommandSchema {
        name: "DEL_HOST_COMMENT",
        description: "Delete one host comment by id",
        fields: COMMENT_ID_ONLY,
    },
    CommandSchema {
        name: "DEL_SVC_COMMENT",
        description: "Delete one service comment by id",
        fields: COMMENT_ID_ONLY,
    },
    CommandSchema {
        name: "DISABLE_ALL_NOTIFICATIONS_BEYOND_HOST",
        description: "Disable notifications for everything beyond a host",
        fields: HOST_ONLY,
    },
    CommandSchema {
        name: "ENABLE_ALL_NOTIFICATIONS_BEYOND_HOST",
        description: "Enable notifications for everything beyond a host",
        fields: HOST_ONLY,
    },
    CommandSchema {
        name: "DISABLE_HOSTGROUP_HOST_CHECKS",
        description: "Disable active checks of all hosts in a hostgroup",
        fields: HOSTGROUP_ONLY,
    },
    CommandSchema {
        name: "ENABLE_HOSTGROUP_HOST_CHECKS",
        description: "Enable active checks of all hosts in a hostgroup",
        fields: HOSTGROUP_ONLY,
    },
    CommandSchema {
        name: "DISABLE_HOSTGROUP_HOST_NOTIFICATIONS",
        description: "Disable notifications for all hosts in a hostgroup",
        fields: HOSTGROUP_ONLY,
    },
    CommandSchema {
        name: "ENABLE_HOSTGROUP_HOST_NOTIFICATIONS",
        description: "Enable notifications for all hosts in a hostgroup",
        fields: HOSTGROUP_ONLY,
    },
    CommandSchema {
        name: "DISABLE_HOSTGROUP_SVC_CHECKS",
        description: "Disable active checks of all services in a hostgroup",
        fields: HOSTGROUP_ONLY,
    },
    CommandSchema {
        name: "ENABLE_HOSTGROUP_SVC_CHECKS",
        description: "Enable active checks of all services in a hostgroup",
        fields: HOSTGROUP_ONLY,
    },
    CommandSchema {
        name: "DISABLE_HOSTGROUP_SVC_NOTIFICATIONS",
        description: "Disable notifications for all services in a hostgroup",
        fields: HOSTGROUP_ONLY,
    },
    CommandSchema {
        name: "ENABLE_HOSTGROUP_SVC_NOTIFICATIONS",
        description: "Enable notifications for all services in a hostgroup",
        fields: HOSTGROUP_ONLY,
    },
    CommandSchema {
        name: "DISABLE_HOST_AND_CHILD_NOTIFICATIONS",
        description: "Disable notifications for a host and its children",
        fields: HOST_ONLY,
    },
    CommandSchema {
        name: "ENABLE_HOST_AND_CHILD_NOTIFICATIONS",
        description: "Enable notifications for a host and its children",
        fields: HOST_ONLY,
    },
    CommandSchema {
        name: "DISABLE_HOST_CHECK",
        description: "Disable active checks of a host",
        fields: HOST_ONLY,
    },
    CommandSchema {
        name: "ENABLE_HOST_CHECK",
        description: "Enable active checks of a host",
        fields: HOST_ONLY,
    },
    CommandSchema {
        name: "DISABLE_HOST_NOTIFICATIONS",
        description: "Disable notifications for a host",
        fields: HOST_ONLY,
    },
    CommandSchema {
        name: "ENABLE_HOST_NOTIFICATIONS",
        description: "Enable notifications for a host",
        fields: HOST_ONLY,
    },
    CommandSchema {
        name: "DISABLE_NOTIFICATIONS",
        description: "Disable notifications globally",
        fields: &[],
    },
    CommandSchema {
        name: "ENABLE_NOTIFICATIONS",
        description: "Enable notifications globally",
        fields: &[],
    },
    CommandSchema {
        name: "SCHEDULE_FORCED_HOST_CHECK",
        description: "Force an immediate check of a host",
        fields: HOST_CHECK_TIME,
    },
    CommandSchema {
        name: "SCHEDULE_FORCED_HOST_SVC_CHECKS",
        description: "Force immediate checks of all services on a host",
        fields: HOST_CHECK_TIME,
    },
    CommandSchema {
        name: "SCHEDULE_FORCED_SVC_CHECK",
        description: "Force an immediate check of a service",
        fields: &[HOSTNAME, SERVICE_DESCRIPTION, CHECK_TIME],
    },
    CommandSchema {
        name: "SCHEDULE_HOST_CHECK",
        description: "Schedule a check of a host",
        fields: HOST_CHECK_TIME,
    },
    CommandSchema {
        name: "SCHEDULE_HOST_DOWNTIME",
        description: "Schedule downtime for a host starting now",
        fields: &[
            HOSTNAME,
            FieldSpec::current_time("start_time"),
            FieldSpec::timestamp("EndTime").required(),
            FieldSpec::integer("Fixed"),
            FieldSpec::integer("TriggerID"),
            FieldSpec::integer("Duration"),
            AUTHOR,
            COMMENT,
        ],
    },
];
