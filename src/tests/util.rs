

// Contracts are assembled by hand here: the compiler that normally
// produces blocks is an external collaborator.

pub fn func_block(fi: FuncInfo, vars: Vec<ValueTy>, code: Vec<ByteCode>) -> Arc<Block> {
    Arc::new(Block {
        ty: ObjType::Func,
        vars,
        code,
        info: BlockInfo::Func(fi),
        ..Default::default()
    })
}

pub fn stmt_block(code: Vec<ByteCode>) -> Arc<Block> {
    Arc::new(Block { code, ..Default::default() })
}

pub fn contract_block(
    name: &str,
    id: u32,
    tx: Option<Vec<FieldInfo>>,
    settings: BTreeMap<String, Value>,
    methods: Vec<(&str, Arc<Block>)>,
) -> Arc<Block> {
    let mut objects = HashMap::new();
    let mut children = vec![];
    for (mname, mblock) in &methods {
        objects.insert(mname.to_string(), ObjInfo::func(mblock.clone()));
        children.push(mblock.clone());
    }
    let contract = Arc::new(Block {
        ty: ObjType::Contract,
        objects,
        children,
        info: BlockInfo::Contract(ContractInfo {
            id,
            name: name.to_string(),
            tx,
            settings,
            ..Default::default()
        }),
        ..Default::default()
    });
    for (_, mblock) in &methods {
        Block::link(mblock, &contract);
    }
    contract
}

// action { $result = "Hi " + $Who }
pub fn greet_action() -> Arc<Block> {
    func_block(
        FuncInfo::default(),
        vec![],
        vec![
            ByteCode::new(OpCode::Push, Value::str("Hi ")),
            ByteCode::new(OpCode::GetExtend, Value::str("Who")),
            ByteCode::op(OpCode::Add),
            ByteCode::new(OpCode::SetExtend, Value::str("result")),
        ],
    )
}

pub fn greet_contract(name: &str) -> Arc<Block> {
    contract_block(
        name,
        1,
        Some(vec![FieldInfo::new("Who", ValueTy::Str, "")]),
        BTreeMap::new(),
        vec![("action", greet_action())],
    )
}

pub fn vm_with(contracts: Vec<(&str, Arc<Block>)>) -> Arc<Vm> {
    let mut vm = Vm::new();
    for (name, block) in contracts {
        vm.attach_block(name, block);
    }
    Arc::new(vm)
}

// bytecode operand for a variadic call site
pub fn call_vari(name: &str, count: i64) -> ByteCode {
    let mut op = BTreeMap::new();
    op.insert(s!("name"), Value::str(name));
    op.insert(s!("count"), Value::int(count));
    ByteCode::new(OpCode::CallVari, Value::Map(op))
}

// action that forwards to another contract with the dummy empty arg
pub fn forward_action(target: &str) -> Arc<Block> {
    func_block(
        FuncInfo::default(),
        vec![],
        vec![
            ByteCode::new(OpCode::Push, Value::str(target)),
            ByteCode::new(OpCode::Push, Value::str("")),
            ByteCode::new(OpCode::Push, Value::str("")),
            call_vari("ExecContract", 3),
        ],
    )
}

// small deterministic generator for property-style loops
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }
    pub fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        self.0 >> 16
    }
    pub fn below(&mut self, n: u64) -> u64 {
        self.next() % n
    }
    pub fn chance(&mut self, percent: u64) -> bool {
        self.below(100) < percent
    }
}
