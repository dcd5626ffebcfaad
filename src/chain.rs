//! Trust-chain reconstruction from classified artifacts.
//!
//! The assembler links eligible certificates by issuer/subject identity
//! into an explicit parent/child graph and walks it from the root down,
//! instead of splicing into a list as certificates are encountered. The
//! walk produces the same ordering but makes the failure shapes visible:
//! competing chains, branching issuers and cycle members are reported as
//! warnings instead of disappearing.
//!
//! Assembly never fails. Missing slots (no root, no end-entity, no key)
//! are valid, reportable outcomes.

use std::collections::HashMap;

use serde::Serialize;

use crate::classify::{ArtifactDescriptor, ArtifactKind};
use crate::identity::IdentityRecord;

/// The reconstructed chain: root first, intermediates in root-to-leaf
/// order, the end-entity certificate (or PKCS#12 bundle) and its key.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ChainResult {
    pub root_ca: Option<ArtifactDescriptor>,
    pub intermediates: Vec<ArtifactDescriptor>,
    pub end_entity: Option<ArtifactDescriptor>,
    pub end_entity_key: Option<ArtifactDescriptor>,
}

/// Partitions descriptors into {root CA, ordered intermediates, end-entity,
/// end-entity key}.
///
/// Private keys and PKCS#12 bundles fill their slots directly (last one
/// wins when several are present). Certificates link by identity: a
/// certificate's parent is the certificate whose first subject equals its
/// issuer. When the input holds several disjoint chains, one is kept and
/// the rest are dropped with a warning; input order breaks ties. A PKCS#12
/// bundle always takes the end-entity slot, displacing the chain leaf.
pub fn assemble(descriptors: Vec<ArtifactDescriptor>) -> ChainResult {
    let mut key_slot = None;
    let mut bundle_slot = None;
    let mut certs: Vec<ArtifactDescriptor> = Vec::new();

    for descriptor in descriptors {
        if descriptor.is_private_key {
            key_slot = Some(descriptor);
        } else if descriptor.kind == ArtifactKind::Pkcs12Bundle {
            bundle_slot = Some(descriptor);
        } else if descriptor.is_linkable() {
            certs.push(descriptor);
        }
        // everything else carries no chain information
    }

    let mut chain = link_chain(&certs);

    let root_ca = if chain.is_empty() {
        None
    } else {
        Some(certs[chain.remove(0)].clone())
    };
    let end_entity = if bundle_slot.is_some() {
        bundle_slot
    } else {
        chain.pop().map(|i| certs[i].clone())
    };
    let intermediates = chain.into_iter().map(|i| certs[i].clone()).collect();

    ChainResult {
        root_ca,
        intermediates,
        end_entity,
        end_entity_key: key_slot,
    }
}

/// Links `certs` into a single root-to-leaf chain of indices.
///
/// Certificates are indexed by their first subject identity; a certificate
/// is the child of the first *other* certificate carrying its issuer as
/// first subject (a self-issued certificate never becomes its own parent).
/// Roots are the certificates left without a parent; the chain starting at
/// the earliest root wins, except that a longer-than-one chain displaces a
/// single-certificate one.
fn link_chain(certs: &[ArtifactDescriptor]) -> Vec<usize> {
    // first subject -> certificate indices, in input order
    let mut subject_to_certs: HashMap<&IdentityRecord, Vec<usize>> = HashMap::new();
    for (index, cert) in certs.iter().enumerate() {
        subject_to_certs
            .entry(&cert.subjects[0])
            .or_insert_with(Vec::new)
            .push(index);
    }

    let mut parent: Vec<Option<usize>> = vec![None; certs.len()];
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); certs.len()];
    for (index, cert) in certs.iter().enumerate() {
        let issuer = cert.issuer.as_ref().unwrap();
        let issuing = subject_to_certs
            .get(issuer)
            .into_iter()
            .flatten()
            .find(|&&candidate| candidate != index);
        if let Some(&issuing) = issuing {
            parent[index] = Some(issuing);
            children[issuing].push(index);
        }
    }

    let mut selected: Vec<usize> = Vec::new();
    for root in 0..certs.len() {
        if parent[root].is_some() {
            continue;
        }
        let walked = walk_from_root(root, &children, certs);
        if selected.is_empty() || (selected.len() == 1 && walked.len() > 1) {
            if !selected.is_empty() {
                tracing::warn!(
                    dropped = %certs[selected[0]].name,
                    "multiple disjoint chains found, keeping the longer one"
                );
            }
            selected = walked;
        } else {
            tracing::warn!(
                root = %certs[root].name,
                "multiple disjoint chains found, dropping chain"
            );
        }
    }

    for (index, cert) in certs.iter().enumerate() {
        if parent[index].is_none() && !selected.contains(&index) {
            continue; // already reported as a dropped chain root
        }
        if !selected.contains(&index) {
            tracing::warn!(name = %cert.name, "certificate not linkable into the chain, dropping");
        }
    }

    selected
}

/// Walks parent-to-child links downward from `root`. A parent with several
/// children is a branching trust path; the earliest child by input order is
/// followed and the branch is reported.
fn walk_from_root(root: usize, children: &[Vec<usize>], certs: &[ArtifactDescriptor]) -> Vec<usize> {
    let mut chain = vec![root];
    let mut current = root;
    loop {
        let next = match children[current].split_first() {
            Some((&next, rest)) => {
                for &skipped in rest {
                    tracing::warn!(
                        parent = %certs[current].name,
                        skipped = %certs[skipped].name,
                        "issuer has multiple children, following the first"
                    );
                }
                next
            }
            None => break,
        };
        if chain.contains(&next) {
            // a walk from a parentless root cannot revisit a node
            break;
        }
        chain.push(next);
        current = next;
    }
    chain
}
