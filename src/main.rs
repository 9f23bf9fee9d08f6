/// Binary entrypoint for the `gen-comment` executable.
///
/// Keeps the binary thin — all business logic lives in the `gen_comment_lib`
/// crate so unit tests can import library functions directly.
fn main() -> std::process::ExitCode {
    gen_comment_lib::run()
}
