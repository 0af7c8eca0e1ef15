

// Reserved extend keys. These are public ABI: contracts and host
// functions communicate through them.
pub const EXT_RT: &str = "rt";                 // runtime handle auto-parameter
pub const EXT_SC: &str = "sc";                 // signed-context opaque
pub const EXT_STACK_CONT: &str = "stack_cont"; // trace callback
pub const EXT_RT_STATE: &str = "rt_state";     // active state id
pub const EXT_PARENT: &str = "parent";         // immediate parent contract name
pub const EXT_RESULT: &str = "result";         // final return value
pub const LOOP_PREFIX: &str = "loop_";         // recursion guard key prefix


pub type ExtendMap = HashMap<String, Value>;

/// The string-keyed value bag shared across a call tree. One owner per
/// top-level call; nested runtimes hold the same cell.
#[derive(Default, Clone)]
pub struct Extend(Rc<RefCell<ExtendMap>>);

impl Extend {

    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(map: ExtendMap) -> Self {
        Self(Rc::new(RefCell::new(map)))
    }

    pub fn get(&self, key: &str) -> Value {
        match self.0.borrow().get(key) {
            Some(v) => v.clone(),
            None => Value::Nil,
        }
    }

    pub fn has(&self, key: &str) -> bool {
        self.0.borrow().contains_key(key)
    }

    pub fn set(&self, key: &str, v: Value) {
        self.0.borrow_mut().insert(key.to_string(), v);
    }

    pub fn remove(&self, key: &str) {
        self.0.borrow_mut().remove(key);
    }

    pub fn snapshot(&self) -> ExtendMap {
        self.0.borrow().clone()
    }
}


/***********************************/


/// Scoped recursion guard: `loop_<name>` is present in extend iff the
/// contract is on the call stack. Removed on every exit path.
pub struct LoopGuard {
    extend: Extend,
    key: String,
}

impl LoopGuard {
    pub fn acquire(extend: Extend, contract: &str) -> VmRes<Self> {
        let key = format!("{}{}", LOOP_PREFIX, contract);
        if extend.has(&key) {
            tracing::error!(contract = contract, "there is loop in contract");
            return vm_err_fmt!(ContractLoop, "there is loop in {} contract", contract)
        }
        extend.set(&key, Value::Bool(true));
        Ok(Self { extend, key })
    }
}

impl Drop for LoopGuard {
    fn drop(&mut self) {
        self.extend.remove(&self.key);
    }
}


/// Restores the previous `parent` value when the invocation leaves scope,
/// error paths included.
pub struct ParentGuard {
    extend: Extend,
    prev: Value,
}

impl ParentGuard {
    pub fn save(extend: Extend) -> Self {
        let prev = extend.get(EXT_PARENT);
        Self { extend, prev }
    }
}

impl Drop for ParentGuard {
    fn drop(&mut self) {
        self.extend.set(EXT_PARENT, self.prev.clone());
    }
}
