

/// Execution entry points of a loaded VM. Implemented on the shared
/// handle: runtimes keep the VM alive for their whole invocation.
pub trait VmDispatch {
    /// Seed a runtime with the given gas budget, empty stacks and a
    /// fresh extend map (the caller installs the shared one before
    /// running).
    fn run_init(&self, cost: i64) -> Runtime;

    /// Polymorphic entry point: resolve the name (state-qualified when
    /// `rt_state` is set), then run the function in a fresh runtime or
    /// invoke the extern thunk. Gas for externs is the extern's own
    /// concern at this layer.
    fn call(&self, name: &str, params: Vec<Value>, extend: &Extend) -> VmRes<Vec<Value>>;
}

impl VmDispatch for Arc<Vm> {

    fn run_init(&self, cost: i64) -> Runtime {
        Runtime {
            vm: self.clone(),
            stack: vec![],
            blocks: vec![],
            cost,
            extend: Extend::default(),
        }
    }

    fn call(&self, name: &str, params: Vec<Value>, extend: &Extend) -> VmRes<Vec<Value>> {
        let obj = match extend.get(EXT_RT_STATE) {
            Value::Int(state) => self.get_obj_by_name_ext(name, state as u32).cloned(),
            _ => self.get_obj_by_name(name).cloned(),
        };
        let Some(obj) = obj else {
            tracing::error!(func = name, "unknown function");
            return vm_err_fmt!(UnknownFunction, "unknown function {}", name)
        };
        match obj.ty {
            ObjType::Func => {
                let Some(block) = obj.block().cloned() else {
                    return vm_err_fmt!(CodeError, "function {} has no code block", name)
                };
                let mut rt = self.run_init(COST_DEFAULT);
                rt.extend = extend.clone();
                rt.run(&block, Some(params))
            }
            ObjType::ExternFunc => {
                let Some(finfo) = obj.extern_info().cloned() else {
                    return vm_err_fmt!(CodeError, "extern {} has no descriptor", name)
                };
                let args = marshal_extern_args(&finfo, params, extend)?;
                let mut rt = self.run_init(COST_DEFAULT);
                rt.extend = extend.clone();
                let func = finfo.func.clone();
                func(&mut rt, args)
            }
            _ => {
                tracing::error!(func = name, "unknown function");
                vm_err_fmt!(UnknownFunction, "unknown function {}", name)
            }
        }
    }
}
