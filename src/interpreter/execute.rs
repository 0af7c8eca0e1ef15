

impl Runtime {

    /// Execute a block against this runtime. Params land on the value
    /// stack first and are bound into the function frame by declared
    /// arity. Returns whatever the stack holds on completion.
    pub fn run(&mut self, block: &Arc<Block>, params: Option<Vec<Value>>) -> VmRes<Vec<Value>> {
        if let Some(ps) = params {
            self.stack.extend(ps);
        }
        self.run_code(block)?;
        Ok(std::mem::take(&mut self.stack))
    }

    /// Run one block. Function blocks get a frame with a fresh local
    /// table; statement blocks execute against the enclosing frame.
    pub(crate) fn run_code(&mut self, block: &Arc<Block>) -> VmRes<Status> {
        let framed = block.ty == ObjType::Func;
        if framed {
            let n = match block.func_info() {
                Some(fi) => fi.params.len(),
                None => 0,
            };
            if self.stack.len() < n {
                return vm_err!(StackError, "not enough stack values for function params")
            }
            let args = self.stack.split_off(self.stack.len() - n);
            let mut vars: Vec<Value> = block.vars.iter().map(|t| t.zero_value()).collect();
            if vars.len() < n {
                vars.resize(n, Value::Nil);
            }
            for (i, v) in args.into_iter().enumerate() {
                vars[i] = v;
            }
            self.blocks.push(RtBlock { block: block.clone(), vars });
        }
        let res = self.exec_codes(block);
        if framed {
            self.blocks.pop();
        }
        match res {
            Ok(Status::Break) | Ok(Status::Continue) if framed => {
                vm_err!(CodeError, "loop control reached function top")
            }
            other => other,
        }
    }

    fn exec_codes(&mut self, block: &Arc<Block>) -> VmRes<Status> {
        let code = &block.code;
        let mut pc = 0usize;
        let mut label_pc: Option<usize> = None;
        let mut cond_taken = false;
        while pc < code.len() {
            if self.cost <= 0 {
                return vm_err!(OutOfGas, "gas budget exhausted")
            }
            let bc = &code[pc];
            match bc.cmd {
                OpCode::Push => self.stack.push(bc.operand.clone()),
                OpCode::GetVar => {
                    let i = operand_index(&bc.operand)?;
                    let v = self.frame_var(i)?;
                    self.stack.push(v);
                }
                OpCode::GetExtend => {
                    let key = operand_str(&bc.operand)?;
                    let v = self.extend.get(key);
                    self.stack.push(v);
                }
                OpCode::SetVar => {
                    let i = operand_index(&bc.operand)?;
                    let v = self.pop()?;
                    self.set_frame_var(i, v)?;
                }
                OpCode::SetExtend => {
                    let key = operand_str(&bc.operand)?;
                    let v = self.pop()?;
                    self.extend.set(key, v);
                }
                OpCode::Call => {
                    let name = operand_str(&bc.operand)?.to_string();
                    self.call_name(block, &name, None)?;
                }
                OpCode::CallVari => {
                    let (name, count) = operand_call(&bc.operand)?;
                    self.call_name(block, &name, Some(count))?;
                }
                OpCode::Return => return Ok(Status::Return),
                OpCode::If => {
                    cond_taken = self.pop()?.check_true();
                    if cond_taken {
                        let child = operand_block(&bc.operand)?;
                        let st = self.run_code(child)?;
                        if st != Status::Normal {
                            return Ok(st)
                        }
                    }
                }
                OpCode::Else => {
                    if !cond_taken {
                        let child = operand_block(&bc.operand)?;
                        let st = self.run_code(child)?;
                        if st != Status::Normal {
                            return Ok(st)
                        }
                    }
                }
                OpCode::Label => label_pc = Some(pc),
                OpCode::While => {
                    if self.pop()?.check_true() {
                        let child = operand_block(&bc.operand)?;
                        match self.run_code(child)? {
                            Status::Return => return Ok(Status::Return),
                            Status::Break => {}
                            _ => {
                                // back to the condition code after the label
                                pc = match label_pc {
                                    Some(l) => l,
                                    None => return vm_err!(CodeError, "while without label"),
                                };
                            }
                        }
                    }
                }
                OpCode::Break => return Ok(Status::Break),
                OpCode::Continue => return Ok(Status::Continue),
                OpCode::Index => {
                    let key = self.pop()?;
                    let obj = self.pop()?;
                    let v = index_value(obj, key)?;
                    self.stack.push(v);
                }
                OpCode::Error => {
                    let v = self.pop()?;
                    return vm_err_fmt!(Thrown, "{}", v)
                }
                OpCode::Not => {
                    let v = self.pop()?;
                    self.stack.push(Value::Bool(!v.check_true()));
                }
                OpCode::Sign => {
                    let v = self.pop()?;
                    let r = value_neg(v)?;
                    self.stack.push(r);
                }
                op => {
                    let b = self.pop()?;
                    let a = self.pop()?;
                    let r = value_binary_op(op, a, b)?;
                    self.stack.push(r);
                }
            }
            pc += 1;
        }
        Ok(Status::Normal)
    }

    /// Resolve a callee: lexical scope chain first, then the global
    /// registry. Functions run nested in this runtime; externs go
    /// through the bridge with auto-injection.
    fn call_name(&mut self, scope: &Arc<Block>, name: &str, vari_count: Option<usize>) -> VmFin {
        let Some(obj) = self.resolve_scope(scope, name) else {
            tracing::error!(func = name, "unknown function");
            return vm_err_fmt!(UnknownFunction, "unknown function {}", name)
        };
        match obj.ty {
            ObjType::Func => {
                self.charge(COST_CALL)?;
                let Some(fblock) = obj.block().cloned() else {
                    return vm_err_fmt!(CodeError, "function {} has no code block", name)
                };
                self.run_code(&fblock)?;
                Ok(())
            }
            ObjType::ExternFunc => {
                let Some(finfo) = obj.extern_info().cloned() else {
                    return vm_err_fmt!(CodeError, "extern {} has no descriptor", name)
                };
                self.charge(COST_EXTEND)?;
                let extra = match &self.vm.ext_cost {
                    Some(cost) => cost(name),
                    None => 0,
                };
                if extra > 0 {
                    self.charge(extra)?;
                }
                let fixed = extern_fixed_arity(&finfo);
                let take = vari_count.unwrap_or(fixed);
                if maybe!(finfo.variadic, take < fixed, take != fixed) {
                    return vm_err_fmt!(CallError, "wrong argument count calling {}", name)
                }
                if self.stack.len() < take {
                    return vm_err_fmt!(StackError, "not enough stack values calling {}", name)
                }
                let supplied = self.stack.split_off(self.stack.len() - take);
                let args = marshal_extern_args(&finfo, supplied, &self.extend)?;
                let func = finfo.func.clone();
                let mut results = func(self, args)?;
                self.stack.append(&mut results);
                Ok(())
            }
            _ => {
                tracing::error!(func = name, "unknown function");
                vm_err_fmt!(UnknownFunction, "unknown function {}", name)
            }
        }
    }

    fn resolve_scope(&self, scope: &Arc<Block>, name: &str) -> Option<ObjInfo> {
        let mut cur = Some(scope.clone());
        while let Some(b) = cur {
            if let Some(obj) = b.objects.get(name) {
                return Some(obj.clone())
            }
            cur = b.parent_block();
        }
        self.vm.get_obj_by_name(name).cloned()
    }

    pub(crate) fn pop(&mut self) -> VmRes<Value> {
        match self.stack.pop() {
            Some(v) => Ok(v),
            None => vm_err!(StackError, "value stack is empty"),
        }
    }

    fn frame_var(&self, i: usize) -> VmRes<Value> {
        let Some(frame) = self.blocks.last() else {
            return vm_err!(StackError, "no active frame")
        };
        match frame.vars.get(i) {
            Some(v) => Ok(v.clone()),
            None => vm_err_fmt!(CodeError, "variable slot {} out of range", i),
        }
    }

    fn set_frame_var(&mut self, i: usize, v: Value) -> VmFin {
        let Some(frame) = self.blocks.last_mut() else {
            return vm_err!(StackError, "no active frame")
        };
        match frame.vars.get_mut(i) {
            Some(slot) => {
                *slot = v;
                Ok(())
            }
            None => vm_err_fmt!(CodeError, "variable slot {} out of range", i),
        }
    }
}
