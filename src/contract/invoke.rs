

// Mandatory method sequence of a contract invocation.
pub const CONTRACT_METHOD_ORDER: [&str; 3] = ["init", "conditions", "action"];

// Extern consulted when the contract declares a Signature tx field.
pub const CHECK_SIGNATURE_FUNC: &str = "check_signature";


fn call_stack_hook(rt: &mut Runtime, hook: &Arc<ExternFuncInfo>, sc: Value, name: Value) -> VmFin {
    let func = hook.func.clone();
    match func(rt, vec![sc, name]) {
        Ok(..) => Ok(()),
        Err(e) => vm_err_fmt!(ExternCallFailed, "{}: {}", hook.name, e),
    }
}


/// Run the named contract: validate the supplied parameters against the
/// declared tx schema, guard against recursion, bind parameters into
/// extend, resolve the parent contract from the frame stack, charge
/// gas, fire the trace and signature hooks, then execute
/// init/conditions/action in order. Returns the string form of
/// `extend["result"]`.
pub fn exec_contract(rt: &mut Runtime, name: &str, txs: &str, values: Vec<Value>) -> VmRes<String> {
    let vm = rt.vm.clone();
    let Some(obj) = vm.root_obj(name) else {
        tracing::error!(contract = name, "unknown contract");
        return vm_err_fmt!(UnknownContract, "unknown contract {}", name)
    };
    let Some(cblock) = obj.block().cloned() else {
        tracing::error!(contract = name, "unknown contract");
        return vm_err_fmt!(UnknownContract, "unknown contract {}", name)
    };
    let Some(cinfo) = cblock.contract_info() else {
        return vm_err_fmt!(UnknownContract, "object {} is not a contract", name)
    };

    let pars: Vec<&str> = txs.split(',').collect();
    if pars.len() != values.len() {
        tracing::error!(
            contract = name,
            expect = pars.len(),
            got = values.len(),
            "wrong contract parameters"
        );
        return vm_err!(BadContractParams, "wrong contract parameters")
    }
    let mut par_names: HashSet<&str> = HashSet::new();
    for par in &pars {
        if !par_names.insert(par) {
            tracing::error!(contract = name, param = %par, "wrong contract parameters");
            return vm_err!(BadContractParams, "wrong contract parameters")
        }
    }

    let mut is_signature = false;
    if let Some(tx) = &cinfo.tx {
        for field in tx {
            if !par_names.contains(field.name.as_str()) {
                if !field.optional() {
                    tracing::error!(contract = name, field = %field.name, "contract parameter is not defined");
                    return vm_err_fmt!(UndefinedParam, "{} is not defined", field.name)
                }
                rt.extend.set(&field.name, field.ty.zero_value());
            }
            if field.name == "Signature" {
                is_signature = true
            }
        }
        // supplied names outside the declared schema are rejected too
        let declared: HashSet<&str> = tx.iter().map(|f| f.name.as_str()).collect();
        for par in &pars {
            if !par.is_empty() && !declared.contains(par) {
                tracing::error!(contract = name, param = %par, "wrong contract parameters");
                return vm_err!(BadContractParams, "wrong contract parameters")
            }
        }
    }

    let _loop_guard = LoopGuard::acquire(rt.extend.clone(), name)?;

    for (par, val) in pars.iter().zip(values.into_iter()) {
        rt.extend.set(par, val);
    }

    // The innermost function frame owned by a contract names the parent;
    // reduce its qualification against the callee.
    let mut parent = s!("");
    for rb in rt.blocks.iter().rev() {
        if rb.block.ty != ObjType::Func {
            continue
        }
        let Some(pblock) = rb.block.parent_block() else { continue };
        if pblock.ty != ObjType::Contract {
            continue
        }
        if let Some(pinfo) = pblock.contract_info() {
            parent = pinfo.name.clone();
            let (fid, fname) = parse_contract(&parent);
            let (cid, _) = parse_contract(name);
            if fname.is_empty() {
                parent = s!("");
            } else if fid == 0 {
                parent = format!("@{}", fname);
            } else if fid == cid {
                parent = fname;
            }
        }
        break;
    }

    rt.charge(COST_CONTRACT)?;
    let _parent_guard = ParentGuard::save(rt.extend.clone());

    let sc = rt.extend.get(EXT_SC);
    let hook = match rt.extend.get(EXT_STACK_CONT) {
        Value::Extern(f) if !sc.is_nil() => Some(f),
        _ => None,
    };
    if let Some(h) = &hook {
        call_stack_hook(rt, h, sc.clone(), Value::Str(s!(name)))?;
    }

    if !sc.is_nil() && is_signature {
        let sig = vm.root_obj(CHECK_SIGNATURE_FUNC).and_then(|o| o.extern_info().cloned());
        let Some(sig) = sig else {
            return vm_err_fmt!(UnknownFunction, "unknown function {}", CHECK_SIGNATURE_FUNC)
        };
        let func = sig.func.clone();
        if let Err(e) = func(rt, vec![Value::Str(s!(name))]) {
            tracing::error!(contract = name, func = CHECK_SIGNATURE_FUNC, error = %e, "executing extended function");
            return Err(e)
        }
    }

    let mut failed: Option<VmError> = None;
    for method in CONTRACT_METHOD_ORDER {
        let mblock = match cblock.objects.get(method) {
            Some(o) if o.ty == ObjType::Func => match o.block() {
                Some(b) => b.clone(),
                None => continue,
            },
            _ => continue,
        };
        let mut sub = vm.run_init(rt.cost);
        sub.extend = rt.extend.clone();
        rt.extend.set(EXT_PARENT, Value::Str(parent.clone()));
        let res = sub.run(&mblock, None);
        rt.cost = sub.cost;
        if let Err(e) = res {
            tracing::error!(contract = name, method = method, error = %e, "executing contract method");
            failed = Some(VmError::new(
                MethodFailed,
                &format!("contract {} method {}: {}", name, method, e),
            ));
            break;
        }
    }

    if let Some(e) = failed {
        if let Some(h) = &hook {
            let _ = call_stack_hook(rt, h, sc.clone(), Value::Str(s!("")));
        }
        return Err(e)
    }
    if let Some(h) = &hook {
        call_stack_hook(rt, h, sc, Value::Str(s!("")))?;
    }

    let result = rt.extend.get(EXT_RESULT);
    Ok(maybe!(result.is_nil(), s!(""), result.to_string()))
}


/// Map-mode contract call: qualify the name with the state, flatten the
/// declared schema into parallel name/value sequences honoring the
/// optional rule, then delegate. An empty value list still carries one
/// empty-string argument (externs expect at least one).
pub fn ex_contract(
    rt: &mut Runtime,
    state: u32,
    name: &str,
    params: Option<BTreeMap<String, Value>>,
) -> VmRes<String> {
    let name = state_name(state, name);
    let vm = rt.vm.clone();
    let Some(obj) = vm.root_obj(&name) else {
        tracing::error!(contract = %name, "unknown contract");
        return vm_err_fmt!(UnknownContract, "unknown contract {}", name)
    };
    let Some(cblock) = obj.block().cloned() else {
        tracing::error!(contract = %name, "unknown contract");
        return vm_err_fmt!(UnknownContract, "unknown contract {}", name)
    };
    let params = params.unwrap_or_default();
    let mut names: Vec<String> = vec![];
    let mut vals: Vec<Value> = vec![];
    if let Some(cinfo) = cblock.contract_info() {
        if let Some(tx) = &cinfo.tx {
            for field in tx {
                match params.get(&field.name) {
                    Some(v) => {
                        names.push(field.name.clone());
                        vals.push(v.clone());
                    }
                    None => {
                        if !field.optional() {
                            tracing::error!(contract = %name, field = %field.name, "contract parameter is not defined");
                            return vm_err_fmt!(UndefinedParam, "{} is not defined", field.name)
                        }
                        names.push(field.name.clone());
                        vals.push(Value::Nil);
                    }
                }
            }
        }
    }
    if vals.is_empty() {
        vals.push(Value::Str(s!("")));
    }
    exec_contract(rt, &name, &names.join(","), vals)
}
