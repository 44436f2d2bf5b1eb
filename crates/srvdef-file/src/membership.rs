//! # Group Membership
//!
//! Server groups list servers and other groups as members. The membership
//! graph must be acyclic so that expanding a group always terminates. The
//! check runs once at load time with a depth-first walk that keeps the
//! groups currently being expanded on a stack.

use std::collections::HashMap;

use indexmap::IndexMap;
use srvdef_core::FormatError;

use crate::load::ServerGroup;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    Expanding,
    Done,
}

/// Fail if any server group contains itself, directly or through nested groups.
///
/// A member for which `is_server` holds is a leaf, as in expansion.
/// Groups are walked in file order, so the reported cycle is deterministic.
pub(crate) fn check_acyclic(
    groups: &IndexMap<String, ServerGroup>,
    is_server: &dyn Fn(&str) -> bool,
    label: &str,
) -> Result<(), FormatError> {
    let mut state: HashMap<&str, Visit> = HashMap::new();
    let mut stack: Vec<&str> = Vec::new();

    for nickname in groups.keys().map(String::as_str).filter(|n| !is_server(n)) {
        if !state.contains_key(nickname) {
            if let Some(cycle) = visit(nickname, groups, is_server, &mut state, &mut stack) {
                return Err(FormatError::MembershipCycle {
                    path: label.to_string(),
                    group: cycle[0].clone(),
                    cycle,
                });
            }
        }
    }
    Ok(())
}

/// Returns the cycle, first and last element being the same group.
fn visit<'a>(
    nickname: &'a str,
    groups: &'a IndexMap<String, ServerGroup>,
    is_server: &dyn Fn(&str) -> bool,
    state: &mut HashMap<&'a str, Visit>,
    stack: &mut Vec<&'a str>,
) -> Option<Vec<String>> {
    let group = groups.get(nickname)?;

    state.insert(nickname, Visit::Expanding);
    stack.push(nickname);

    for member in &group.members {
        if is_server(member.as_str()) || !groups.contains_key(member.as_str()) {
            continue;
        }
        match state.get(member.as_str()) {
            Some(Visit::Done) => {}
            Some(Visit::Expanding) => {
                let start = stack.iter().position(|g| *g == member.as_str()).unwrap_or(0);
                let mut cycle: Vec<String> = stack[start..].iter().map(|g| g.to_string()).collect();
                cycle.push(member.clone());
                return Some(cycle);
            }
            None => {
                if let Some(cycle) = visit(member, groups, is_server, state, stack) {
                    return Some(cycle);
                }
            }
        }
    }

    stack.pop();
    state.insert(nickname, Visit::Done);
    None
}
