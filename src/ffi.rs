use libc::{c_longlong, c_uchar, size_t};

use crate::algorithm::johnson::Johnson;
use crate::graph::directed::DirectedGraph;
use crate::graph::traits::MutableGraph;

#[repr(C)]
pub struct FfiGraph {
    graph: DirectedGraph<i64>,
}

/// Creates a graph with `vertex_count` isolated vertices
#[no_mangle]
pub extern "C" fn apsp_graph_new(vertex_count: size_t) -> *mut FfiGraph {
    Box::into_raw(Box::new(FfiGraph {
        graph: DirectedGraph::with_vertex_count(vertex_count),
    }))
}

/// Adds or overwrites an edge; returns false for out-of-range vertices
#[no_mangle]
pub extern "C" fn apsp_graph_add_edge(
    g: *mut FfiGraph,
    tail: size_t,
    head: size_t,
    weight: c_longlong,
) -> bool {
    if g.is_null() {
        return false;
    }
    unsafe { &mut *g }.graph.add_edge(tail, head, weight).is_ok()
}

/// Removes an edge; returns false if it does not exist
#[no_mangle]
pub extern "C" fn apsp_graph_remove_edge(g: *mut FfiGraph, tail: size_t, head: size_t) -> bool {
    if g.is_null() {
        return false;
    }
    unsafe { &mut *g }.graph.remove_edge(tail, head).is_ok()
}

#[no_mangle]
pub extern "C" fn apsp_graph_free(g: *mut FfiGraph) {
    if !g.is_null() {
        unsafe {
            drop(Box::from_raw(g));
        }
    }
}

/// Row-major `vertex_count * vertex_count` matrix. `reachable[i]` is 0 where `distances[i]`
/// carries no value.
#[repr(C)]
pub struct FfiMatrix {
    pub distances: *mut c_longlong,
    pub reachable: *mut c_uchar,
    pub vertex_count: size_t,
}

#[no_mangle]
pub extern "C" fn apsp_matrix_free(m: *mut FfiMatrix) {
    if !m.is_null() {
        unsafe {
            let len = (*m).vertex_count * (*m).vertex_count;
            if !(*m).distances.is_null() {
                drop(Box::from_raw(std::ptr::slice_from_raw_parts_mut((*m).distances, len)));
            }
            if !(*m).reachable.is_null() {
                drop(Box::from_raw(std::ptr::slice_from_raw_parts_mut((*m).reachable, len)));
            }
            drop(Box::from_raw(m));
        }
    }
}

/// Runs Johnson's algorithm. Returns null on a negative cycle or weight overflow.
#[no_mangle]
pub extern "C" fn apsp_all_pairs(g: *const FfiGraph) -> *mut FfiMatrix {
    if g.is_null() {
        return std::ptr::null_mut();
    }
    let graph = unsafe { &(*g).graph };
    match Johnson::new().run_all_pairs(graph) {
        Ok(result) => {
            let vertex_count = result.vertex_count();
            let entries: Vec<Option<i64>> = result.distances.into_iter().flatten().collect();
            let distances: Box<[c_longlong]> = entries.iter().map(|d| d.unwrap_or(0)).collect();
            let reachable: Box<[c_uchar]> = entries.iter().map(|d| d.is_some() as c_uchar).collect();
            Box::into_raw(Box::new(FfiMatrix {
                distances: Box::into_raw(distances) as *mut c_longlong,
                reachable: Box::into_raw(reachable) as *mut c_uchar,
                vertex_count,
            }))
        }
        Err(err) => {
            log::warn!("all-pairs computation failed: {}", err);
            std::ptr::null_mut()
        }
    }
}
