

// Full contract reference: @<state_id><bare_name>
const CONTRACT_NAME_PATTERN: &str = r"^@(\d+)(\w[_\w\d]*)$";

fn contract_name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(CONTRACT_NAME_PATTERN).unwrap())
}

/// Qualify a name with its state: `@<state><name>`. State 0 means "no
/// specific state" and leaves the name unchanged.
pub fn state_name(state: u32, name: &str) -> String {
    maybe!(state == 0, name.to_string(), format!("@{}{}", state, name))
}

/// Split a full contract reference into state id and bare name.
/// Returns `(0, "")` on non-match. An id that fails to parse is logged
/// and defaults to 0 without failing the name part.
pub fn parse_contract(input: &str) -> (u64, String) {
    match contract_name_re().captures(input) {
        Some(caps) => {
            // state ids are 32-bit; anything wider is a conversion error
            let id = match caps[1].parse::<u32>() {
                Ok(n) => n as u64,
                Err(e) => {
                    tracing::error!(
                        value = &caps[1],
                        error = %e,
                        "converting state identifier from string while parsing contract"
                    );
                    0
                }
            };
            (id, caps[2].to_string())
        }
        None => (0, String::new()),
    }
}
