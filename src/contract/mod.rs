use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, OnceLock};

use regex::Regex;

use super::machine::*;
use super::obj::*;
use super::rt::*;
use super::value::*;

use super::rt::VmErrCode::*;

include! {"parse.rs"}
include! {"invoke.rs"}
include! {"settings.rs"}
