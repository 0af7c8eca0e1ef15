

#[allow(unused)]
macro_rules! s {
    ($v:expr) => { ($v).to_string() };
}

#[allow(unused)]
macro_rules! maybe {
    ($c:expr, $v1:expr, $v2:expr) => {
        match $c {
            true => $v1,
            false => $v2,
        }
    };
}


// error define
#[repr(u8)]
#[derive(Default, PartialEq, Eq, Debug, Clone, Copy)]
pub enum VmErrCode {
    UnknownContract   = 1u8,
    UnknownFunction   = 2,
    BadContractParams = 3,
    UndefinedParam    = 4,
    ContractLoop      = 5,
    OutOfGas          = 6,
    ExternCallFailed  = 7,
    ConversionError   = 8,
    MethodFailed      = 9,

    CodeError         = 21,
    StackError        = 22,
    TypeError         = 23,
    Arithmetic        = 24,
    CallError         = 25,

    Thrown            = 31, // user code error statement

    #[default] NeverError = 255,
}


#[derive(Debug, Clone)]
pub struct VmError(pub VmErrCode, pub String);

impl fmt::Display for VmError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}({}): {}", self.0, self.0 as u8, self.1)
    }
}

impl VmError {
    pub fn new(n: VmErrCode, tip: &str) -> VmError {
        VmError(n, tip.to_string())
    }
    pub fn code(n: VmErrCode) -> VmError {
        VmError(n, s!(""))
    }
    pub fn kind(&self) -> VmErrCode {
        self.0
    }
}

// VM Runtime Error
pub type VmRes<T> = Result<T, VmError>;
pub type VmFin = Result<(), VmError>;


#[allow(unused)]
macro_rules! vm_err {
    ($code: expr, $tip: expr) => {
        Err(VmError($code, $tip.to_string()))
    }
}

#[allow(unused)]
macro_rules! vm_err_code {
    ($code: expr) => {
        Err(VmError($code, "".to_string()))
    }
}

#[allow(unused)]
macro_rules! vm_err_fmt {
    ($code: expr, $( $v: expr),+ ) => {
        Err(VmError::new($code, &format!($( $v ),+)))
    }
}
