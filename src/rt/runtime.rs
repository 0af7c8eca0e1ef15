

/// One frame per executing function block. The frame owns the local
/// variable table; statement blocks run against the enclosing frame.
pub struct RtBlock {
    pub block: Arc<Block>,
    pub vars: Vec<Value>,
}


/// Per-invocation execution state. Created by `Vm::run_init`, discarded
/// when the top-level call returns. The `Vm` itself stays shared and
/// read-only.
pub struct Runtime {
    pub vm: Arc<Vm>,
    pub stack: Vec<Value>,
    pub blocks: Vec<RtBlock>,
    pub cost: i64,
    pub extend: Extend,
}

impl Runtime {

    /// Deduct gas before entering a callee body. A negative balance
    /// after the charge aborts the whole call chain.
    pub fn charge(&mut self, amount: i64) -> VmFin {
        self.cost -= amount;
        maybe!(self.cost < 0, vm_err!(OutOfGas, "gas budget exhausted"), Ok(()))
    }
}
