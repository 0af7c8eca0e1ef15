

pub const OPTIONAL_TAG: &str = "optional";


/// Deploying actor and state of a contract.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct OwnerInfo {
    #[serde(rename = "state")]
    pub state_id: u32,
    #[serde(rename = "active")]
    pub active: bool,
    #[serde(rename = "tableid")]
    pub table_id: i64,
    #[serde(rename = "walletid")]
    pub wallet_id: i64,
    #[serde(rename = "tokenid")]
    pub token_id: i64,
}


/// One declared parameter of a contract's tx schema.
#[derive(Debug, Default, Clone)]
pub struct FieldInfo {
    pub name: String,
    pub ty: ValueTy,
    pub tags: String, // comma list
}

impl FieldInfo {

    pub fn new(name: &str, ty: ValueTy, tags: &str) -> Self {
        Self { name: name.to_string(), ty, tags: tags.to_string() }
    }

    pub fn optional(&self) -> bool {
        self.tags.contains(OPTIONAL_TAG)
    }
}


#[derive(Debug, Default, Clone)]
pub struct ContractInfo {
    pub id: u32,
    pub name: String,
    pub owner: OwnerInfo,
    pub used: HashSet<String>, // called contracts
    pub tx: Option<Vec<FieldInfo>>,
    pub settings: BTreeMap<String, Value>,
}


/// Parameters of a tail-name call attached to a function.
#[derive(Debug, Default, Clone)]
pub struct FuncName {
    pub params: Vec<ValueTy>,
    pub offset: Vec<usize>,
    pub variadic: bool,
}

#[derive(Debug, Default, Clone)]
pub struct FuncInfo {
    pub params: Vec<ValueTy>,
    pub results: Vec<ValueTy>,
    pub names: Option<HashMap<String, FuncName>>,
    pub variadic: bool,
    pub id: u32,
}
