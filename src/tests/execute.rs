

#[test]
fn while_loop_sums_a_range() {
    // i = 1; sum = 0; while i < 6 { sum += i; i += 1 }; return sum
    let body = stmt_block(vec![
        ByteCode::new(OpCode::GetVar, Value::int(1)),
        ByteCode::new(OpCode::GetVar, Value::int(0)),
        ByteCode::op(OpCode::Add),
        ByteCode::new(OpCode::SetVar, Value::int(1)),
        ByteCode::new(OpCode::GetVar, Value::int(0)),
        ByteCode::new(OpCode::Push, Value::int(1)),
        ByteCode::op(OpCode::Add),
        ByteCode::new(OpCode::SetVar, Value::int(0)),
    ]);
    let sum5 = func_block(
        FuncInfo::default(),
        vec![ValueTy::Int, ValueTy::Int],
        vec![
            ByteCode::new(OpCode::Push, Value::int(1)),
            ByteCode::new(OpCode::SetVar, Value::int(0)),
            ByteCode::new(OpCode::Push, Value::int(0)),
            ByteCode::new(OpCode::SetVar, Value::int(1)),
            ByteCode::op(OpCode::Label),
            ByteCode::new(OpCode::GetVar, Value::int(0)),
            ByteCode::new(OpCode::Push, Value::int(6)),
            ByteCode::op(OpCode::Less),
            ByteCode::new(OpCode::While, Value::Block(body)),
            ByteCode::new(OpCode::GetVar, Value::int(1)),
            ByteCode::op(OpCode::Return),
        ],
    );
    let vm = vm_with(vec![("sum5", sum5)]);
    let ret = vm.call("sum5", vec![], &Extend::new()).unwrap();
    assert_eq!(ret, vec![Value::int(15)]);
}

#[test]
fn if_else_branches_on_condition() {
    let judge = func_block(
        FuncInfo { params: vec![ValueTy::Int], ..Default::default() },
        vec![ValueTy::Int],
        vec![
            ByteCode::new(OpCode::GetVar, Value::int(0)),
            ByteCode::new(OpCode::Push, Value::int(10)),
            ByteCode::op(OpCode::Great),
            ByteCode::new(
                OpCode::If,
                Value::Block(stmt_block(vec![
                    ByteCode::new(OpCode::Push, Value::str("big")),
                    ByteCode::new(OpCode::SetExtend, Value::str("r")),
                ])),
            ),
            ByteCode::new(
                OpCode::Else,
                Value::Block(stmt_block(vec![
                    ByteCode::new(OpCode::Push, Value::str("small")),
                    ByteCode::new(OpCode::SetExtend, Value::str("r")),
                ])),
            ),
        ],
    );
    let vm = vm_with(vec![("judge", judge)]);
    let extend = Extend::new();
    vm.call("judge", vec![Value::int(15)], &extend).unwrap();
    assert_eq!(extend.get("r"), Value::str("big"));
    vm.call("judge", vec![Value::int(5)], &extend).unwrap();
    assert_eq!(extend.get("r"), Value::str("small"));
}

#[test]
fn break_exits_the_loop() {
    // i = 0; while true { i += 1; if i == 3 { break } }; return i
    let body = stmt_block(vec![
        ByteCode::new(OpCode::GetVar, Value::int(0)),
        ByteCode::new(OpCode::Push, Value::int(1)),
        ByteCode::op(OpCode::Add),
        ByteCode::new(OpCode::SetVar, Value::int(0)),
        ByteCode::new(OpCode::GetVar, Value::int(0)),
        ByteCode::new(OpCode::Push, Value::int(3)),
        ByteCode::op(OpCode::Eq),
        ByteCode::new(
            OpCode::If,
            Value::Block(stmt_block(vec![ByteCode::op(OpCode::Break)])),
        ),
    ]);
    let counter = func_block(
        FuncInfo::default(),
        vec![ValueTy::Int],
        vec![
            ByteCode::new(OpCode::Push, Value::int(0)),
            ByteCode::new(OpCode::SetVar, Value::int(0)),
            ByteCode::op(OpCode::Label),
            ByteCode::new(OpCode::Push, Value::Bool(true)),
            ByteCode::new(OpCode::While, Value::Block(body)),
            ByteCode::new(OpCode::GetVar, Value::int(0)),
            ByteCode::op(OpCode::Return),
        ],
    );
    let vm = vm_with(vec![("counter", counter)]);
    let ret = vm.call("counter", vec![], &Extend::new()).unwrap();
    assert_eq!(ret, vec![Value::int(3)]);
}

#[test]
fn nested_function_calls_charge_and_return() {
    let helper = func_block(
        FuncInfo { params: vec![ValueTy::Int], ..Default::default() },
        vec![ValueTy::Int],
        vec![
            ByteCode::new(OpCode::GetVar, Value::int(0)),
            ByteCode::new(OpCode::Push, Value::int(2)),
            ByteCode::op(OpCode::Mul),
            ByteCode::op(OpCode::Return),
        ],
    );
    let main = func_block(
        FuncInfo::default(),
        vec![],
        vec![
            ByteCode::new(OpCode::Push, Value::int(21)),
            ByteCode::new(OpCode::Call, Value::str("double_it")),
            ByteCode::op(OpCode::Return),
        ],
    );
    let vm = vm_with(vec![("double_it", helper), ("main", main.clone())]);
    let mut rt = vm.run_init(1000);
    let ret = rt.run(&main, None).unwrap();
    assert_eq!(ret, vec![Value::int(42)]);
    assert_eq!(rt.cost, 1000 - COST_CALL);
}

#[test]
fn gas_exhaustion_aborts_execution() {
    let main = func_block(
        FuncInfo::default(),
        vec![],
        vec![
            ByteCode::new(OpCode::Push, Value::int(1)),
            ByteCode::op(OpCode::Return),
        ],
    );
    let vm = vm_with(vec![("main", main.clone())]);
    let mut rt = vm.run_init(0);
    let err = rt.run(&main, None).unwrap_err();
    assert_eq!(err.kind(), VmErrCode::OutOfGas);

    // a call charge that overdraws the budget is fatal too
    let caller = func_block(
        FuncInfo::default(),
        vec![],
        vec![ByteCode::new(OpCode::Call, Value::str("main"))],
    );
    let vm = vm_with(vec![("main", main), ("caller", caller.clone())]);
    let mut rt = vm.run_init(COST_CALL - 1);
    let err = rt.run(&caller, None).unwrap_err();
    assert_eq!(err.kind(), VmErrCode::OutOfGas);
}

#[test]
fn extend_function_call_charges_extend_cost_and_table() {
    let probe = func_block(
        FuncInfo::default(),
        vec![],
        vec![
            ByteCode::new(OpCode::Push, Value::str("Pong")),
            ByteCode::new(OpCode::Push, Value::str("k")),
            ByteCode::new(OpCode::Call, Value::str("Settings")),
        ],
    );
    let pong = contract_block("Pong", 1, None, BTreeMap::new(), vec![]);
    let mut vm = Vm::new();
    vm.attach_block("Pong", pong);
    vm.attach_block("probe", probe.clone());
    vm.ext_cost = Some(Box::new(|name: &str| maybe!(name == "Settings", 7, 0)));
    let vm = Arc::new(vm);

    let mut rt = vm.run_init(1000);
    rt.run(&probe, None).unwrap();
    assert_eq!(rt.cost, 1000 - COST_EXTEND - 7);
}

#[test]
fn thrown_error_statement_aborts_with_message() {
    let main = func_block(
        FuncInfo::default(),
        vec![],
        vec![
            ByteCode::new(OpCode::Push, Value::str("unacceptable")),
            ByteCode::op(OpCode::Error),
        ],
    );
    let vm = vm_with(vec![("main", main.clone())]);
    let mut rt = vm.run_init(1000);
    let err = rt.run(&main, None).unwrap_err();
    assert_eq!(err.kind(), VmErrCode::Thrown);
    assert!(err.1.contains("unacceptable"));
}

#[test]
fn index_reads_map_entries() {
    let mut m = BTreeMap::new();
    m.insert(s!("a"), Value::int(1));
    let main = func_block(
        FuncInfo::default(),
        vec![],
        vec![
            ByteCode::new(OpCode::Push, Value::Map(m)),
            ByteCode::new(OpCode::Push, Value::str("a")),
            ByteCode::op(OpCode::Index),
            ByteCode::op(OpCode::Return),
        ],
    );
    let vm = vm_with(vec![("main", main.clone())]);
    let mut rt = vm.run_init(1000);
    let ret = rt.run(&main, None).unwrap();
    assert_eq!(ret, vec![Value::int(1)]);
}

#[test]
fn unknown_callee_in_code_is_reported() {
    let main = func_block(
        FuncInfo::default(),
        vec![],
        vec![ByteCode::new(OpCode::Call, Value::str("no_such_fn"))],
    );
    let vm = vm_with(vec![("main", main.clone())]);
    let mut rt = vm.run_init(1000);
    let err = rt.run(&main, None).unwrap_err();
    assert_eq!(err.kind(), VmErrCode::UnknownFunction);
}
