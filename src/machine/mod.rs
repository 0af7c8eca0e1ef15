use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use super::contract::*;
use super::obj::*;
use super::rt::*;
use super::value::*;

use super::rt::VmErrCode::*;

include! {"vm.rs"}
include! {"bridge.rs"}
include! {"dispatch.rs"}
include! {"setup.rs"}
