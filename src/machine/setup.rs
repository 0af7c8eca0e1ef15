

// Built-in host functions every VM carries. Contracts reach them under
// the symbolic names registered below.

fn builtin_exec_contract(rt: &mut Runtime, args: Vec<Value>) -> VmRes<Vec<Value>> {
    let mut it = args.into_iter();
    let name = it.next().unwrap_or_default().cast_str()?;
    let txs = it.next().unwrap_or_default().cast_str()?;
    let values: Vec<Value> = it.collect();
    let res = exec_contract(rt, &name, &txs, values)?;
    Ok(vec![Value::Str(res)])
}

fn builtin_call_contract(rt: &mut Runtime, args: Vec<Value>) -> VmRes<Vec<Value>> {
    let mut it = args.into_iter();
    let state = it.next().unwrap_or_default().cast_u32()?;
    let name = it.next().unwrap_or_default().cast_str()?;
    let params = match it.next() {
        Some(v) => Some(v.cast_map()?),
        None => None,
    };
    let res = ex_contract(rt, state, &name, params)?;
    Ok(vec![Value::Str(res)])
}

fn builtin_settings(rt: &mut Runtime, args: Vec<Value>) -> VmRes<Vec<Value>> {
    let mut it = args.into_iter();
    let cntname = it.next().unwrap_or_default().cast_str()?;
    let key = it.next().unwrap_or_default().cast_str()?;
    let val = get_settings(rt, &cntname, &key)?;
    Ok(vec![val])
}

pub fn builtin_extend_data() -> ExtendData {
    let mut objects = HashMap::new();
    objects.insert(
        s!("ExecContract"),
        ExternDef::new(
            vec![ValueTy::Runtime, ValueTy::Str, ValueTy::Str, ValueTy::Slice],
            vec![ValueTy::Str],
            builtin_exec_contract,
        )
        .variadic(),
    );
    objects.insert(
        s!("CallContract"),
        ExternDef::new(
            vec![ValueTy::Runtime, ValueTy::Int, ValueTy::Str, ValueTy::Map],
            vec![ValueTy::Str],
            builtin_call_contract,
        ),
    );
    objects.insert(
        s!("Settings"),
        ExternDef::new(
            vec![ValueTy::Runtime, ValueTy::Str, ValueTy::Str],
            vec![ValueTy::Str],
            builtin_settings,
        ),
    );
    let mut auto_pars = HashMap::new();
    auto_pars.insert(s!(ValueTy::Runtime.type_name()), s!(EXT_RT));
    ExtendData { objects, auto_pars }
}
