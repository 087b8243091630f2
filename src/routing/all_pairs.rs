//! All-pairs shortest distances (Floyd–Warshall)

use crate::store::is_edge;

/// Floyd–Warshall closure of a weight matrix.
///
/// `dists[i][j]` must hold the direct weight between `i` and `j`, with the
/// `NO_EDGE` sentinel for absent edges and `0.0` on the diagonal. Returns the
/// matrix of minimum path sums; unreachable pairs keep the sentinel.
///
/// O(V³) time, O(V²) space. Negative weights are not supported.
pub fn floyd_warshall(mut dists: Vec<Vec<f64>>) -> Vec<Vec<f64>> {
    let v = dists.len();

    for intermediate in 0..v {
        for source in 0..v {
            // Nothing routes through `intermediate` from here.
            if !is_edge(dists[source][intermediate]) {
                continue;
            }
            for dest in 0..v {
                if is_edge(dists[intermediate][dest])
                    && dists[source][intermediate] + dists[intermediate][dest]
                        < dists[source][dest]
                {
                    dists[source][dest] =
                        dists[source][intermediate] + dists[intermediate][dest];
                }
            }
        }
    }

    dists
}
