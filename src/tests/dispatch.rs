

#[test]
fn unknown_name_is_rejected_without_registry_mutation() {
    let vm = vm_with(vec![("Greet", greet_contract("Greet"))]);
    let before = vm.root.objects.len();
    let extend = Extend::new();
    let err = vm.call("Unknown", vec![], &extend).unwrap_err();
    assert_eq!(err.kind(), VmErrCode::UnknownFunction);
    assert_eq!(vm.root.objects.len(), before);
}

#[test]
fn function_call_binds_params_and_returns_stack() {
    let inc = func_block(
        FuncInfo { params: vec![ValueTy::Int], ..Default::default() },
        vec![ValueTy::Int],
        vec![
            ByteCode::new(OpCode::GetVar, Value::int(0)),
            ByteCode::new(OpCode::Push, Value::int(1)),
            ByteCode::op(OpCode::Add),
            ByteCode::op(OpCode::Return),
        ],
    );
    let vm = vm_with(vec![("inc", inc)]);
    let extend = Extend::new();
    let ret = vm.call("inc", vec![Value::int(41)], &extend).unwrap();
    assert_eq!(ret, vec![Value::int(42)]);
}

#[test]
fn rt_state_switches_resolution() {
    let double = func_block(
        FuncInfo { params: vec![ValueTy::Int], ..Default::default() },
        vec![ValueTy::Int],
        vec![
            ByteCode::new(OpCode::GetVar, Value::int(0)),
            ByteCode::new(OpCode::Push, Value::int(2)),
            ByteCode::op(OpCode::Mul),
            ByteCode::op(OpCode::Return),
        ],
    );
    let vm = vm_with(vec![("@5double", double), ("@5foo", greet_contract("@5foo"))]);
    let extend = Extend::new();
    // no state set: unqualified lookup only
    let err = vm.call("double", vec![Value::int(3)], &extend).unwrap_err();
    assert_eq!(err.kind(), VmErrCode::UnknownFunction);
    extend.set(EXT_RT_STATE, Value::int(5));
    let ret = vm.call("double", vec![Value::int(3)], &extend).unwrap();
    assert_eq!(ret, vec![Value::int(6)]);
    // a contract object resolves but is neither function nor extern
    let err = vm.call("foo", vec![Value::str("Ada")], &extend).unwrap_err();
    assert_eq!(err.kind(), VmErrCode::UnknownFunction);
}

#[test]
fn extern_call_through_dispatcher_injects_and_unwraps() {
    let mut vm = Vm::new();
    let mut objects = HashMap::new();
    objects.insert(
        s!("echo_signed"),
        ExternDef::new(
            vec![ValueTy::Runtime, ValueTy::Opaque, ValueTy::Str],
            vec![ValueTy::Str],
            |rt: &mut Runtime, args: Vec<Value>| {
                rt.extend.set("got_sc", args[0].clone());
                Ok(vec![args[1].clone()])
            },
        ),
    );
    let mut auto_pars = HashMap::new();
    auto_pars.insert(s!(ValueTy::Runtime.type_name()), s!(EXT_RT));
    auto_pars.insert(s!(ValueTy::Opaque.type_name()), s!(EXT_SC));
    vm.extend(ExtendData { objects, auto_pars });
    let vm = Arc::new(vm);

    let extend = Extend::new();
    extend.set(EXT_SC, Value::str("SC"));
    let ret = vm.call("echo_signed", vec![Value::str("x")], &extend).unwrap();
    assert_eq!(ret, vec![Value::str("x")]);
    assert_eq!(extend.get("got_sc"), Value::str("SC"));
}

#[test]
fn contract_execution_end_to_end_via_exec_contract_name() {
    let vm = vm_with(vec![("Greet", greet_contract("Greet"))]);
    let extend = Extend::new();
    let ret = vm
        .call(
            "ExecContract",
            vec![Value::str("Greet"), Value::str("Who"), Value::str("Ada")],
            &extend,
        )
        .unwrap();
    assert_eq!(ret, vec![Value::str("Hi Ada")]);
    assert_eq!(extend.get(EXT_RESULT), Value::str("Hi Ada"));
}
