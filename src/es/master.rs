use elasticsearch::Elasticsearch;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use tokio::net::{UdpSocket, lookup_host};

use crate::error::AppError;

/// Local address the OS would route through to reach `host:port`.
///
/// Connecting a UDP socket only selects a route; no datagram is sent.
pub async fn local_ip(host: &str, port: u16) -> Result<IpAddr, AppError> {
    let addrs: Vec<SocketAddr> = lookup_host((host, port)).await?.collect();
    let target = addrs
        .iter()
        .find(|addr| addr.is_ipv4())
        .or_else(|| addrs.first())
        .copied()
        .ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{host} did not resolve to any address"),
            )
        })?;

    let unspecified: IpAddr = match target {
        SocketAddr::V4(_) => Ipv4Addr::UNSPECIFIED.into(),
        SocketAddr::V6(_) => Ipv6Addr::UNSPECIFIED.into(),
    };
    let socket = UdpSocket::bind((unspecified, 0)).await?;
    socket.connect(target).await?;
    Ok(socket.local_addr()?.ip())
}

/// IP of the elected master, as reported by `_cat/master?h=ip`.
pub async fn master_ip(client: &Elasticsearch) -> Result<String, AppError> {
    let response = client
        .cat()
        .master()
        .h(&["ip"])
        .send()
        .await?;

    let status = response.status_code();
    let body = response.text().await?;
    if !status.is_success() {
        tracing::error!("Failed to get IP address of cluster master: {body}");
        return Err(AppError::MasterLookup {
            status_code: status.as_u16(),
            details: body,
        });
    }

    Ok(body.trim().to_string())
}

pub async fn is_master(client: &Elasticsearch, host: &str, port: u16) -> Result<bool, AppError> {
    let local = local_ip(host, port).await?;
    let master = master_ip(client).await?;
    tracing::debug!("Local IP {local}, cluster master IP {master}");

    Ok(same_host(&master, local))
}

/// An unparsable or empty master IP never matches.
pub fn same_host(master: &str, local: IpAddr) -> bool {
    master
        .trim()
        .parse::<IpAddr>()
        .is_ok_and(|master| master == local)
}
