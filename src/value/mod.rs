use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use num_bigint::BigInt;
use num_traits::Zero;

use super::obj;
use super::interpreter::*;
use super::machine::*;
use super::rt::*;

use super::rt::VmErrCode::*;

include! {"ty.rs"}
include! {"item.rs"}
include! {"convert.rs"}
