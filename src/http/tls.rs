use std::path::Path;

use reqwest::{Certificate, ClientBuilder, Identity};
use tracing::debug;

use crate::config::MtlsPaths;
use crate::error::{ConfigError, TlsFileRole};

/// Loads the CA and client identity and applies both to the builder.
///
/// All three files are read before any is parsed so a missing file is
/// reported even when another one is malformed. Only the custom CA is
/// trusted for server verification.
///
/// The identity goes through rustls, which takes PKCS#8, PKCS#1 (`RSA
/// PRIVATE KEY`) and SEC1 (`EC PRIVATE KEY`) keys. native-tls only loads
/// PKCS#8.
pub(super) fn apply_mtls(
    builder: ClientBuilder,
    paths: &MtlsPaths,
) -> Result<ClientBuilder, ConfigError> {
    let ca_pem = read_tls_file(TlsFileRole::Ca, &paths.ca)?;
    let cert_pem = read_tls_file(TlsFileRole::Cert, &paths.cert)?;
    let key_pem = read_tls_file(TlsFileRole::Key, &paths.key)?;

    let ca = Certificate::from_pem(&ca_pem).map_err(|err| ConfigError::InvalidCa {
        path: paths.ca.clone(),
        source: err,
    })?;
    let identity = Identity::from_pem(&identity_pem(&cert_pem, &key_pem)).map_err(|err| {
        ConfigError::InvalidIdentity {
            cert: paths.cert.clone(),
            key: paths.key.clone(),
            source: err,
        }
    })?;

    debug!(
        ca = %paths.ca.display(),
        cert = %paths.cert.display(),
        "Loaded mTLS material"
    );

    Ok(builder
        .use_rustls_tls()
        .tls_built_in_root_certs(false)
        .add_root_certificate(ca)
        .identity(identity))
}

/// Cert chain followed by the key, as one PEM bundle.
fn identity_pem(cert_pem: &[u8], key_pem: &[u8]) -> Vec<u8> {
    let capacity = cert_pem.len().saturating_add(key_pem.len()).saturating_add(1);
    let mut bundle = Vec::with_capacity(capacity);
    bundle.extend_from_slice(cert_pem);
    if !cert_pem.ends_with(b"\n") {
        bundle.push(b'\n');
    }
    bundle.extend_from_slice(key_pem);
    bundle
}

fn read_tls_file(role: TlsFileRole, path: &Path) -> Result<Vec<u8>, ConfigError> {
    std::fs::read(path).map_err(|err| ConfigError::ReadTlsFile {
        role,
        path: path.to_path_buf(),
        source: err,
    })
}
