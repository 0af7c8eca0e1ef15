use std::sync::Arc;

use super::machine::*;
use super::obj::*;
use super::rt::*;
use super::value::*;

use super::rt::VmErrCode::*;

include! {"instruction.rs"}
include! {"execute.rs"}
