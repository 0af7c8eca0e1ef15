use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use super::*;

include! {"util.rs"}
include! {"registry.rs"}
include! {"dispatch.rs"}
include! {"invoke.rs"}
include! {"execute.rs"}
