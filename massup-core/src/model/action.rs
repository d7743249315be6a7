/// A single directive from the template, carrying the raw (unresolved)
/// parameter text after the directive keyword.
#[derive(PartialEq, Debug)]
pub enum Action {
    Print(String),
    Save(String),
    Mkdir(String),
}
