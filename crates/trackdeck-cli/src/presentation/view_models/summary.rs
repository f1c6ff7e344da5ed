/// One stat tile of the summary row.
#[derive(Debug, Clone)]
pub struct StatViewModel {
    pub label: &'static str,
    pub value: String,
}
