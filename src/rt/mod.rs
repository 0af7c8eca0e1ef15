use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use super::machine::*;
use super::obj::*;
use super::value::*;

use VmErrCode::*;

include! {"error.rs"}
include! {"gas.rs"}
include! {"extend.rs"}
include! {"runtime.rs"}
