use argyle_derive::argyle_error;

#[argyle_error]
pub enum DemoError {
    #[error("IO error: {source}")]
    Io { source: std::io::Error, context: Option<String> },
}

fn main() {}
