use argyle_derive::argyle_error;

#[argyle_error]
pub struct DemoError {
    message: String,
}

fn main() {}
