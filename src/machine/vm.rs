

// Deployment modes exposed to the embedder. Opaque tags for the core VM.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VmType {
    Smart = 1,
    Vde   = 2,
}

// Leading child slots of the root block kept for system use.
pub const SYSTEM_BLOCK_RESERVE: usize = 256;

pub type ExtCostFn = Box<dyn Fn(&str) -> i64 + Send + Sync>;


/// The virtual machine root. The root block's `objects` map is the
/// global registry. Write-once at load time (`&mut` methods), shared
/// read-only between runtimes afterwards.
pub struct Vm {
    pub root: Block,
    pub ext_cost: Option<ExtCostFn>,
    pub func_calls_db: HashSet<String>,
    pub extern_mode: bool, // extern mode of compilation
}

impl Default for Vm {
    fn default() -> Self {
        Self::new()
    }
}

impl Vm {

    pub fn new() -> Vm {
        let mut root = Block::default();
        root.children = Vec::with_capacity(1024);
        for _ in 0..SYSTEM_BLOCK_RESERVE {
            root.children.push(Arc::new(Block::default()));
        }
        let mut vm = Vm {
            root,
            ext_cost: None,
            func_calls_db: HashSet::new(),
            // construction opens the load phase; the embedder flushes
            // the flag once every contract source is attached
            extern_mode: true,
        };
        vm.extend(builtin_extend_data());
        vm
    }

    /// Attach a compiled top-level block under the given (possibly
    /// state-qualified) name.
    pub fn attach_block(&mut self, name: &str, block: Arc<Block>) {
        let ty = block.ty;
        self.root.children.push(block.clone());
        self.root.objects.insert(name.to_string(), ObjInfo { ty, value: ObjValue::Code(block) });
    }

    /// Post-load transition: leave the extern compilation mode the VM
    /// was constructed in.
    pub fn flush_extern(&mut self) {
        self.extern_mode = false;
    }

    /// Whether calling the named extern requires embedder database
    /// access (per its registration).
    pub fn requires_db(&self, name: &str) -> bool {
        self.func_calls_db.contains(name)
    }

    /// Direct root registry lookup, no dotted descent.
    pub fn root_obj(&self, name: &str) -> Option<&ObjInfo> {
        self.root.objects.get(name)
    }

    /// Dotted-path lookup: descends through contract and function
    /// scopes only; any miss resolves to none.
    pub fn get_obj_by_name(&self, name: &str) -> Option<&ObjInfo> {
        let mut block = &self.root;
        let segs: Vec<&str> = name.split('.').collect();
        let mut found: Option<&ObjInfo> = None;
        for (i, seg) in segs.iter().enumerate() {
            let ret = block.objects.get(*seg)?;
            found = Some(ret);
            if i + 1 == segs.len() {
                break
            }
            if ret.ty != ObjType::Contract && ret.ty != ObjType::Func {
                return None
            }
            block = ret.block()?.as_ref();
        }
        found
    }

    /// Unqualified lookup first, then the state-qualified retry.
    pub fn get_obj_by_name_ext(&self, name: &str, state: u32) -> Option<&ObjInfo> {
        let sname = state_name(state, name);
        match self.get_obj_by_name(name) {
            Some(obj) => Some(obj),
            None if !sname.is_empty() => self.get_obj_by_name(&sname),
            None => None,
        }
    }
}
