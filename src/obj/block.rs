

// Kinds of the compiled objects.
#[repr(u8)]
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjType {
    #[default] Unknown = 0,
    Contract   = 1,
    Func       = 2,
    ExternFunc = 3,
    Var        = 4,
    ExternVar  = 5,
}


#[derive(Debug, Clone)]
pub enum ObjValue {
    Code(Arc<Block>),
    Extern(Arc<ExternFuncInfo>),
}

#[derive(Debug, Clone)]
pub struct ObjInfo {
    pub ty: ObjType,
    pub value: ObjValue,
}

impl ObjInfo {

    pub fn contract(block: Arc<Block>) -> Self {
        Self { ty: ObjType::Contract, value: ObjValue::Code(block) }
    }

    pub fn func(block: Arc<Block>) -> Self {
        Self { ty: ObjType::Func, value: ObjValue::Code(block) }
    }

    pub fn extern_func(info: Arc<ExternFuncInfo>) -> Self {
        Self { ty: ObjType::ExternFunc, value: ObjValue::Extern(info) }
    }

    pub fn block(&self) -> Option<&Arc<Block>> {
        match &self.value {
            ObjValue::Code(b) => Some(b),
            _ => None,
        }
    }

    pub fn extern_info(&self) -> Option<&Arc<ExternFuncInfo>> {
        match &self.value {
            ObjValue::Extern(x) => Some(x),
            _ => None,
        }
    }
}


#[derive(Debug, Default)]
pub enum BlockInfo {
    #[default] None,
    Contract(ContractInfo),
    Func(FuncInfo),
}


/// A compiled lexical scope: named objects, declared locals, bytecode,
/// owned child scopes and a non-owning link to the enclosing scope.
/// Blocks are produced by the compiler, attached to the VM at load time
/// and immutable afterwards.
#[derive(Debug, Default)]
pub struct Block {
    pub objects: HashMap<String, ObjInfo>,
    pub ty: ObjType,
    pub parent: OnceLock<Weak<Block>>,
    pub children: Vec<Arc<Block>>,
    pub vars: Vec<ValueTy>,
    pub code: Vec<ByteCode>,
    pub info: BlockInfo,
}

impl Block {

    pub fn new(ty: ObjType) -> Self {
        Self { ty, ..Default::default() }
    }

    /// Set once at attach time; further calls are ignored.
    pub fn link(child: &Block, parent: &Arc<Block>) {
        let _ = child.parent.set(Arc::downgrade(parent));
    }

    pub fn parent_block(&self) -> Option<Arc<Block>> {
        self.parent.get().and_then(|w| w.upgrade())
    }

    pub fn contract_info(&self) -> Option<&ContractInfo> {
        match &self.info {
            BlockInfo::Contract(ci) => Some(ci),
            _ => None,
        }
    }

    pub fn func_info(&self) -> Option<&FuncInfo> {
        match &self.info {
            BlockInfo::Func(fi) => Some(fi),
            _ => None,
        }
    }
}
