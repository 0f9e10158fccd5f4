//! Source fan-out validation.

use ar_equipment::Equipment;

use crate::error::{NetworkError, NetworkResult};

/// Check that `source` can physically feed all `branches` at once.
///
/// The pairwise engine treats `max_outputs` as declarative data; this is the
/// assembler-side enforcement: the branch count must fit under the cap and
/// every branch must individually satisfy the `can_connect` conditions
/// (reported apart, as in the line builder).
pub fn validate_fanout(source: &Equipment, branches: &[&Equipment]) -> NetworkResult<()> {
    let source_kind = source.as_source().ok_or_else(|| NetworkError::NotASource {
        uid: source.uid.clone(),
    })?;
    if branches.len() > source_kind.max_outputs as usize {
        return Err(NetworkError::FanoutExceeded {
            uid: source.uid.clone(),
            requested: branches.len(),
            max: source_kind.max_outputs,
        });
    }
    if !source.is_operational() {
        return Err(NetworkError::NotOperational {
            uid: source.uid.clone(),
        });
    }
    for branch in branches {
        if !branch.is_operational() {
            return Err(NetworkError::NotOperational {
                uid: branch.uid.clone(),
            });
        }
        if source.connectable_outputs(branch).is_empty() {
            return Err(NetworkError::NoCompatibleCoupling {
                from: source.uid.clone(),
                to: branch.uid.clone(),
            });
        }
    }
    Ok(())
}
