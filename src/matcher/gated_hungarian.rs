//! Gated Hungarian matching on a track/object cost matrix.
//!
//! Only entries that pass the gate are eligible. The bipartite graph of
//! eligible entries is split into connected components and each component is
//! solved on its own: eligible entries keep their cost, ineligible ones are
//! charged the bound value, and any ineligible pair the solver still picks is
//! dropped afterwards.

use std::collections::VecDeque;

use ndarray::{Array2, ArrayView2};
use tracing::{debug, trace, warn};

use crate::matcher::base_matcher::AssignmentResult;
use crate::matcher::linear_assignment;

/// Direction of optimization and of the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OptimizeFlag {
    /// Costs are distances: keep entries strictly below the gate, minimize.
    #[default]
    OptMin,
    /// Costs are similarities: keep entries strictly above the gate, maximize.
    OptMax,
}

impl OptimizeFlag {
    /// Whether `cost` passes a gate at `threshold`. Non-finite costs never do.
    #[inline]
    pub fn is_valid_cost(self, cost: f64, threshold: f64) -> bool {
        if !cost.is_finite() {
            return false;
        }
        match self {
            OptimizeFlag::OptMin => cost < threshold,
            OptimizeFlag::OptMax => cost > threshold,
        }
    }
}

/// Rows and columns connected through eligible entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Component {
    rows: Vec<usize>,
    cols: Vec<usize>,
}

enum Node {
    Row(usize),
    Col(usize),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GatedHungarianMatcher;

impl GatedHungarianMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Match rows to columns of `costs`.
    ///
    /// `max_gate` decides eligibility; `bound_gate` is the cost charged for an
    /// ineligible pair inside a component. Returned indices are local to the
    /// matrix: pairs sorted by row, leftovers ascending.
    pub fn solve(
        &self,
        costs: ArrayView2<f64>,
        max_gate: f64,
        bound_gate: f64,
        opt_flag: OptimizeFlag,
    ) -> AssignmentResult {
        let (rows, cols) = costs.dim();
        if rows == 0 || cols == 0 {
            return AssignmentResult {
                matches: vec![],
                unmatched_tracks: (0..rows).collect(),
                unmatched_detections: (0..cols).collect(),
            };
        }

        let non_finite = costs.iter().filter(|c| !c.is_finite()).count();
        if non_finite > 0 {
            warn!(non_finite, rows, cols, "non-finite costs gated out");
        }

        let components = connected_components(costs, max_gate, opt_flag);
        let mut matches = Vec::new();
        for component in &components {
            optimize_component(costs, component, max_gate, bound_gate, opt_flag, &mut matches);
        }
        matches.sort_unstable();

        let mut row_matched = vec![false; rows];
        let mut col_matched = vec![false; cols];
        for &(i, j) in &matches {
            row_matched[i] = true;
            col_matched[j] = true;
        }
        let unmatched_tracks = (0..rows).filter(|&i| !row_matched[i]).collect();
        let unmatched_detections = (0..cols).filter(|&j| !col_matched[j]).collect();

        debug!(
            rows,
            cols,
            components = components.len(),
            matched = matches.len(),
            "gated hungarian solved"
        );

        AssignmentResult {
            matches,
            unmatched_tracks,
            unmatched_detections,
        }
    }
}

/// Breadth-first search over eligible entries, seeded in ascending row order.
/// Rows without any eligible entry belong to no component.
fn connected_components(
    costs: ArrayView2<f64>,
    max_gate: f64,
    opt_flag: OptimizeFlag,
) -> Vec<Component> {
    let (rows, cols) = costs.dim();
    let valid = |i: usize, j: usize| opt_flag.is_valid_cost(costs[[i, j]], max_gate);

    let mut row_visited = vec![false; rows];
    let mut col_visited = vec![false; cols];
    let mut components = Vec::new();
    let mut queue = VecDeque::new();

    for start in 0..rows {
        if row_visited[start] || !(0..cols).any(|j| valid(start, j)) {
            continue;
        }

        let mut component = Component::default();
        row_visited[start] = true;
        queue.push_back(Node::Row(start));

        while let Some(node) = queue.pop_front() {
            match node {
                Node::Row(i) => {
                    component.rows.push(i);
                    for j in 0..cols {
                        if !col_visited[j] && valid(i, j) {
                            col_visited[j] = true;
                            queue.push_back(Node::Col(j));
                        }
                    }
                }
                Node::Col(j) => {
                    component.cols.push(j);
                    for i in 0..rows {
                        if !row_visited[i] && valid(i, j) {
                            row_visited[i] = true;
                            queue.push_back(Node::Row(i));
                        }
                    }
                }
            }
        }

        component.rows.sort_unstable();
        component.cols.sort_unstable();
        components.push(component);
    }

    components
}

fn optimize_component(
    costs: ArrayView2<f64>,
    component: &Component,
    max_gate: f64,
    bound_gate: f64,
    opt_flag: OptimizeFlag,
    matches: &mut Vec<(usize, usize)>,
) {
    let valid = |cost: f64| opt_flag.is_valid_cost(cost, max_gate);

    // Every component holds at least one eligible entry.
    if let ([row], [col]) = (component.rows.as_slice(), component.cols.as_slice()) {
        matches.push((*row, *col));
        return;
    }

    let fill = component_fill(costs, component, max_gate, bound_gate, opt_flag);
    let local = Array2::from_shape_fn(
        (component.rows.len(), component.cols.len()),
        |(i, j)| {
            let cost = costs[[component.rows[i], component.cols[j]]];
            if valid(cost) { cost } else { fill }
        },
    );

    let local_pairs = match opt_flag {
        OptimizeFlag::OptMin => linear_assignment::minimize(local.view(), fill),
        OptimizeFlag::OptMax => linear_assignment::maximize(local.view(), fill),
    };
    trace!(
        rows = component.rows.len(),
        cols = component.cols.len(),
        pairs = local_pairs.len(),
        "component optimized"
    );

    for (i, j) in local_pairs {
        let (row, col) = (component.rows[i], component.cols[j]);
        if valid(costs[[row, col]]) {
            matches.push((row, col));
        }
    }
}

/// Cost used for ineligible entries of a component. A non-finite bound falls
/// back to one unit past the worst eligible cost so the solver only ever
/// sees finite values.
fn component_fill(
    costs: ArrayView2<f64>,
    component: &Component,
    max_gate: f64,
    bound_gate: f64,
    opt_flag: OptimizeFlag,
) -> f64 {
    if bound_gate.is_finite() {
        return bound_gate;
    }
    let eligible = component.rows.iter().flat_map(|&i| {
        component
            .cols
            .iter()
            .map(move |&j| costs[[i, j]])
    });
    let eligible = eligible.filter(|&c| opt_flag.is_valid_cost(c, max_gate));
    match opt_flag {
        OptimizeFlag::OptMin => eligible.fold(f64::MIN, f64::max) + 1.0,
        OptimizeFlag::OptMax => eligible.fold(f64::MAX, f64::min) - 1.0,
    }
}
