//! Listener creation with port-conflict fallback
//!
//! Binds the configured address with `SO_REUSEADDR` so quick restarts during
//! development do not trip over sockets in TIME_WAIT. When the port is
//! already taken, retries exactly once on the next port up.

use crate::logger;
use socket2::{Domain, Protocol, Socket, Type};
use std::io;
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Bind `addr`, falling back once to `port + 1` on a conflict.
///
/// Returns the listener together with the address actually bound. Any error
/// other than a port conflict, or a conflict with fallback disabled, is
/// returned as-is.
pub fn bind_with_fallback(addr: SocketAddr, fallback: bool) -> io::Result<(TcpListener, SocketAddr)> {
    match create_listener(addr) {
        Ok(listener) => Ok((listener, addr)),
        Err(e) if e.kind() == io::ErrorKind::AddrInUse && fallback => {
            let Some(next_port) = addr.port().checked_add(1) else {
                return Err(e);
            };
            let fallback_addr = SocketAddr::new(addr.ip(), next_port);
            logger::log_port_fallback(addr.port(), next_port);
            create_listener(fallback_addr).map(|listener| (listener, fallback_addr))
        }
        Err(e) => Err(e),
    }
}

/// Create a `TcpListener` with `SO_REUSEADDR` enabled.
fn create_listener(addr: SocketAddr) -> io::Result<TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;

    // Allow binding to a port in TIME_WAIT state
    socket.set_reuse_address(true)?;

    // Non-blocking mode for async compatibility
    socket.set_nonblocking(true)?;

    socket.bind(&addr.into())?;
    socket.listen(128)?;

    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}
