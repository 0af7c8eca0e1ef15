

// Structured bytecode: one record per operation, statement blocks ride
// in the operand. No jump offsets.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpCode {
    Push      = 1,  // push literal operand
    GetVar    = 2,  // push frame variable
    GetExtend = 3,  // push extend value
    SetVar    = 4,  // pop into frame variable
    SetExtend = 5,  // pop into extend
    Call      = 6,  // call function or extern by name
    CallVari  = 7,  // call with explicit argument count
    Return    = 8,
    If        = 9,  // pop condition, run operand block when true
    Else      = 10, // run operand block when the preceding If did not
    Label     = 11, // loop re-entry point
    While     = 12, // pop condition, run body, re-run from label
    Break     = 13,
    Continue  = 14,
    Index     = 15, // pop key then map, push element
    Error     = 16, // pop value, abort

    Not       = 20,
    Sign      = 21,
    Add       = 22,
    Sub       = 23,
    Mul       = 24,
    Div       = 25,
    And       = 26,
    Or        = 27,
    Eq        = 28,
    NotEq     = 29,
    Less      = 30,
    LessEq    = 31,
    Great     = 32,
    GreatEq   = 33,
}


/// One instruction record: a command and its additional parameter.
#[derive(Debug, Clone)]
pub struct ByteCode {
    pub cmd: OpCode,
    pub operand: Value,
}

impl ByteCode {

    pub fn new(cmd: OpCode, operand: Value) -> Self {
        Self { cmd, operand }
    }

    pub fn op(cmd: OpCode) -> Self {
        Self { cmd, operand: Value::Nil }
    }
}


/// Block completion state, threaded out of nested statement blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Normal,
    Return,
    Break,
    Continue,
}


fn operand_index(v: &Value) -> VmRes<usize> {
    match v {
        Value::Int(n) if *n >= 0 => Ok(*n as usize),
        v => vm_err_fmt!(CodeError, "bad variable slot operand {:?}", v),
    }
}

fn operand_str(v: &Value) -> VmRes<&str> {
    match v {
        Value::Str(s) => Ok(s),
        v => vm_err_fmt!(CodeError, "bad name operand {:?}", v),
    }
}

fn operand_block(v: &Value) -> VmRes<&Arc<Block>> {
    match v {
        Value::Block(b) => Ok(b),
        v => vm_err_fmt!(CodeError, "bad block operand {:?}", v),
    }
}

fn operand_call(v: &Value) -> VmRes<(String, usize)> {
    let Value::Map(m) = v else {
        return vm_err_fmt!(CodeError, "bad call operand {:?}", v)
    };
    let name = match m.get("name") {
        Some(Value::Str(s)) => s.clone(),
        _ => return vm_err!(CodeError, "call operand without name"),
    };
    let count = match m.get("count") {
        Some(Value::Int(n)) if *n >= 0 => *n as usize,
        _ => return vm_err!(CodeError, "call operand without count"),
    };
    Ok((name, count))
}

fn index_value(obj: Value, key: Value) -> VmRes<Value> {
    let key = key.cast_str()?;
    match obj {
        Value::Map(m) => Ok(m.get(&key).cloned().unwrap_or_default()),
        v => vm_err_fmt!(TypeError, "cannot index {:?}", v),
    }
}
