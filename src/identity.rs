//! Canonical certificate identities.
//!
//! Issuer and subject records are reduced to four optional fields: uid,
//! common name, record kind, and hostname. Linkage equality is field-wise
//! over this structure; the flat [`encode`](IdentityRecord::encode) string
//! exists only for display and serialization, because plain concatenation
//! is ambiguous (uid="A",cn="BC" encodes the same as uid="AB",cn="C").

use std::fmt;

use serde::Serialize;
use x509_parser::der_parser::oid;
use x509_parser::oid_registry::Oid;
use x509_parser::x509::X509Name;

/// userId attribute from the COSINE schema (RFC 4519).
const OID_UID: Oid<'static> = oid!(0.9.2342.19200300.100.1.1);

/// One identity encountered in a certificate, either a distinguished name
/// or a subject-alternative-name entry.
///
/// No normalization (case folding, whitespace trimming) is performed; two
/// records compare equal only when all four fields match exactly.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq, Serialize)]
pub struct IdentityRecord {
    pub uid: Option<String>,
    pub common_name: Option<String>,
    pub kind: Option<String>,
    pub hostname: Option<String>,
}

impl IdentityRecord {
    /// Builds a record from a distinguished name, keeping the UID and CN
    /// attributes when present.
    pub fn from_x509_name(name: &X509Name) -> IdentityRecord {
        let uid = name
            .iter_by_oid(&OID_UID)
            .filter_map(|attr| attr.as_str().ok())
            .next()
            .map(String::from);
        let common_name = name
            .iter_common_name()
            .filter_map(|attr| attr.as_str().ok())
            .next()
            .map(String::from);
        IdentityRecord {
            uid,
            common_name,
            kind: None,
            hostname: None,
        }
    }

    /// Builds a record for a DNS subject-alternative-name entry.
    pub fn host(dns_name: &str) -> IdentityRecord {
        IdentityRecord {
            uid: None,
            common_name: None,
            kind: Some(String::from("host")),
            hostname: Some(String::from(dns_name)),
        }
    }

    /// The canonical flat string: present fields concatenated in the fixed
    /// order uid, common name, kind, hostname, absent fields contributing
    /// nothing. Lossy; never used for linkage comparison.
    pub fn encode(&self) -> String {
        let mut ret = String::new();
        for field in [&self.uid, &self.common_name, &self.kind, &self.hostname] {
            if let Some(value) = field {
                ret.push_str(value);
            }
        }
        ret
    }
}

impl fmt::Display for IdentityRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}
