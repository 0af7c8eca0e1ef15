

impl Value {

    /// Truthiness used by branch conditions and boolean operators.
    pub fn check_true(&self) -> bool {
        match self {
            Bool(b) => *b,
            Int(n) => *n != 0,
            Money(m) => !m.is_zero(),
            Str(s) => !s.is_empty(),
            Map(m) => !m.is_empty(),
            Nil => false,
            _ => true,
        }
    }

    pub fn cast_str(self) -> VmRes<String> {
        match self {
            Str(s) => Ok(s),
            v => vm_err_fmt!(TypeError, "expect string got {:?}", v),
        }
    }

    pub fn cast_int(self) -> VmRes<i64> {
        match self {
            Int(n) => Ok(n),
            v => vm_err_fmt!(TypeError, "expect int got {:?}", v),
        }
    }

    pub fn cast_u32(self) -> VmRes<u32> {
        let n = self.cast_int()?;
        match u32::try_from(n) {
            Ok(v) => Ok(v),
            Err(..) => vm_err_fmt!(ConversionError, "value {} out of state id range", n),
        }
    }

    pub fn cast_map(self) -> VmRes<BTreeMap<String, Value>> {
        match self {
            Map(m) => Ok(m),
            Nil => Ok(BTreeMap::new()),
            v => vm_err_fmt!(TypeError, "expect map got {:?}", v),
        }
    }

    fn into_money(self) -> VmRes<BigInt> {
        match self {
            Money(m) => Ok(m),
            Int(n) => Ok(BigInt::from(n)),
            v => vm_err_fmt!(TypeError, "expect numeric got {:?}", v),
        }
    }
}


pub fn value_neg(v: Value) -> VmRes<Value> {
    match v {
        Int(n) => match n.checked_neg() {
            Some(r) => Ok(Int(r)),
            None => vm_err!(Arithmetic, "integer negation overflow"),
        },
        Money(m) => Ok(Money(-m)),
        v => vm_err_fmt!(TypeError, "expect numeric got {:?}", v),
    }
}

fn value_equal(a: &Value, b: &Value) -> VmRes<bool> {
    Ok(match (a, b) {
        (Nil, Nil) => true,
        (Nil, _) | (_, Nil) => false,
        (Bool(x), Bool(y)) => x == y,
        (Str(x), Str(y)) => x == y,
        (Int(x), Int(y)) => x == y,
        (Money(x), Money(y)) => x == y,
        (Money(x), Int(y)) => *x == BigInt::from(*y),
        (Int(x), Money(y)) => BigInt::from(*x) == *y,
        _ => return vm_err_fmt!(TypeError, "cannot compare {:?} and {:?}", a, b),
    })
}

fn value_cmp(a: Value, b: Value) -> VmRes<std::cmp::Ordering> {
    Ok(match (a, b) {
        (Int(x), Int(y)) => x.cmp(&y),
        (Str(x), Str(y)) => x.cmp(&y),
        (x, y) => {
            if matches!(x, Int(..) | Money(..)) && matches!(y, Int(..) | Money(..)) {
                x.into_money()?.cmp(&y.into_money()?)
            } else {
                return vm_err_fmt!(TypeError, "cannot order {:?} and {:?}", x, y)
            }
        }
    })
}

/// Binary operator evaluation for the interpreter. Integer arithmetic is
/// checked; money arithmetic is arbitrary precision; `Add` concatenates
/// when the left operand is a string. Division truncates (no floats).
pub fn value_binary_op(op: OpCode, a: Value, b: Value) -> VmRes<Value> {
    use std::cmp::Ordering;
    Ok(match op {
        OpCode::Add => match (a, b) {
            (Str(x), y) => Str(x + &y.to_string()),
            (Int(x), Int(y)) => match x.checked_add(y) {
                Some(r) => Int(r),
                None => return vm_err!(Arithmetic, "integer addition overflow"),
            },
            (x, y) => Money(x.into_money()? + y.into_money()?),
        },
        OpCode::Sub => match (a, b) {
            (Int(x), Int(y)) => match x.checked_sub(y) {
                Some(r) => Int(r),
                None => return vm_err!(Arithmetic, "integer subtraction overflow"),
            },
            (x, y) => Money(x.into_money()? - y.into_money()?),
        },
        OpCode::Mul => match (a, b) {
            (Int(x), Int(y)) => match x.checked_mul(y) {
                Some(r) => Int(r),
                None => return vm_err!(Arithmetic, "integer multiplication overflow"),
            },
            (x, y) => Money(x.into_money()? * y.into_money()?),
        },
        OpCode::Div => match (a, b) {
            (Int(x), Int(y)) => {
                if y == 0 {
                    return vm_err!(Arithmetic, "division by zero")
                }
                match x.checked_div(y) {
                    Some(r) => Int(r),
                    None => return vm_err!(Arithmetic, "integer division overflow"),
                }
            }
            (x, y) => {
                let y = y.into_money()?;
                if y.is_zero() {
                    return vm_err!(Arithmetic, "division by zero")
                }
                Money(x.into_money()? / y)
            }
        },
        OpCode::And => Bool(a.check_true() && b.check_true()),
        OpCode::Or => Bool(a.check_true() || b.check_true()),
        OpCode::Eq => Bool(value_equal(&a, &b)?),
        OpCode::NotEq => Bool(!value_equal(&a, &b)?),
        OpCode::Less => Bool(value_cmp(a, b)? == Ordering::Less),
        OpCode::LessEq => Bool(value_cmp(a, b)? != Ordering::Greater),
        OpCode::Great => Bool(value_cmp(a, b)? == Ordering::Greater),
        OpCode::GreatEq => Bool(value_cmp(a, b)? != Ordering::Less),
        op => return vm_err_fmt!(CodeError, "opcode {:?} is not a binary operator", op),
    })
}
