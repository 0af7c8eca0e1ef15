

/// Uniform host-callable thunk. Replaces signature reflection: every
/// registered callable type-checks its own arguments and returns its
/// results as a value sequence.
pub type ExternFn = Arc<dyn Fn(&mut Runtime, Vec<Value>) -> VmRes<Vec<Value>> + Send + Sync>;


/// VM-visible descriptor of a registered host callable. `auto[i]`
/// holds the extend key injected at position `i`, or empty when the
/// caller supplies that position.
pub struct ExternFuncInfo {
    pub name: String,
    pub params: Vec<ValueTy>,
    pub results: Vec<ValueTy>,
    pub auto: Vec<String>,
    pub variadic: bool,
    pub func: ExternFn,
}

impl fmt::Debug for ExternFuncInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ExternFuncInfo")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("results", &self.results)
            .field("auto", &self.auto)
            .field("variadic", &self.variadic)
            .finish()
    }
}


/// Registration record: the explicit signature the reflection-free
/// bridge needs, plus the thunk itself.
pub struct ExternDef {
    pub params: Vec<ValueTy>,
    pub results: Vec<ValueTy>,
    pub variadic: bool,
    pub calls_db: bool,
    pub func: ExternFn,
}

impl ExternDef {

    pub fn new(
        params: Vec<ValueTy>,
        results: Vec<ValueTy>,
        func: impl Fn(&mut Runtime, Vec<Value>) -> VmRes<Vec<Value>> + Send + Sync + 'static,
    ) -> Self {
        Self { params, results, variadic: false, calls_db: false, func: Arc::new(func) }
    }

    pub fn variadic(mut self) -> Self {
        self.variadic = true;
        self
    }

    /// Mark the callable as touching the embedder's database; its name
    /// lands in the VM's `func_calls_db` registry on registration.
    pub fn calls_db(mut self) -> Self {
        self.calls_db = true;
        self
    }
}


/// Host registration payload: named callables plus the
/// type-name -> extend-key auto-parameter mapping.
#[derive(Default)]
pub struct ExtendData {
    pub objects: HashMap<String, ExternDef>,
    pub auto_pars: HashMap<String, String>,
}


impl Vm {

    /// Register host callables. Each parameter whose type name appears
    /// in `auto_pars` gets its extend key recorded for auto-injection.
    pub fn extend(&mut self, data: ExtendData) {
        let ExtendData { objects, auto_pars } = data;
        for (key, def) in objects {
            if def.calls_db {
                self.func_calls_db.insert(key.clone());
            }
            let auto = def
                .params
                .iter()
                .map(|p| auto_pars.get(p.type_name()).cloned().unwrap_or_default())
                .collect();
            let info = ExternFuncInfo {
                name: key.clone(),
                params: def.params,
                results: def.results,
                auto,
                variadic: def.variadic,
                func: def.func,
            };
            self.root.objects.insert(key, ObjInfo::extern_func(Arc::new(info)));
        }
    }
}


/// Caller-supplied argument count of an extern: declared positions
/// minus auto-injected slots minus the variadic tail.
pub fn extern_fixed_arity(finfo: &ExternFuncInfo) -> usize {
    let auto = finfo.auto.iter().filter(|a| !a.is_empty()).count();
    let vari = maybe!(finfo.variadic, 1, 0);
    finfo.params.len().saturating_sub(auto + vari)
}

/// Build the positional argument sequence of an extern call. Auto
/// slots are injected from extend (the `rt` key collapses into the
/// thunk's runtime argument); the variadic tail passes through as the
/// remainder of the sequence.
pub fn marshal_extern_args(
    finfo: &ExternFuncInfo,
    supplied: Vec<Value>,
    extend: &Extend,
) -> VmRes<Vec<Value>> {
    let total = finfo.params.len();
    let mut out = Vec::with_capacity(supplied.len().max(total));
    let mut it = supplied.into_iter();
    for i in 0..total {
        let auto = finfo.auto.get(i).map(|a| a.as_str()).unwrap_or("");
        if auto == EXT_RT {
            continue
        }
        if !auto.is_empty() {
            out.push(extend.get(auto));
            continue
        }
        if finfo.variadic && i + 1 == total {
            out.extend(it.by_ref());
            return Ok(out)
        }
        match it.next() {
            Some(v) => out.push(v),
            None => return vm_err_fmt!(CallError, "not enough arguments calling {}", finfo.name),
        }
    }
    if it.next().is_some() {
        return vm_err_fmt!(CallError, "too many arguments calling {}", finfo.name)
    }
    Ok(out)
}
