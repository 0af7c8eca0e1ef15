

/// Read-only lookup of a contract-declared configuration value.
/// A contract without settings, or a missing key, yields an empty
/// string without error.
pub fn get_settings(rt: &Runtime, cntname: &str, key: &str) -> VmRes<Value> {
    let Some(obj) = rt.vm.root_obj(cntname) else {
        tracing::error!(contract = cntname, "unknown contract");
        return vm_err_fmt!(UnknownContract, "unknown contract {}", cntname)
    };
    let Some(cblock) = obj.block() else {
        tracing::error!(contract = cntname, "unknown contract");
        return vm_err_fmt!(UnknownContract, "unknown contract {}", cntname)
    };
    if let Some(cinfo) = cblock.contract_info() {
        if let Some(val) = cinfo.settings.get(key) {
            return Ok(val.clone())
        }
    }
    Ok(Value::Str(s!("")))
}
