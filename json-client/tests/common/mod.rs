use std::net::TcpListener;

use mockito::ServerGuard;

/// `server`'s URL for `path`, with `user_info` embedded before the host.
pub fn url_with_auth(server: &ServerGuard, user_info: &str, path: &str) -> String {
    format!("http://{}@{}{}", user_info, server.host_with_port(), path)
}

/// A local URL that nothing is listening on.
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}/ping")
}
