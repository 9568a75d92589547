use common::ServiceKind;

fn main() -> std::process::ExitCode {
    server::launch(ServiceKind::Customer)
}
