use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Arc, OnceLock, Weak};

use serde::{Deserialize, Serialize};

use super::interpreter::*;
use super::machine::*;
use super::value::*;

include! {"block.rs"}
include! {"info.rs"}
