use crate::types::Node;

/// Child lines stop indenting past this depth and carry their depth in
/// brackets instead, so a list-shaped tree renders in linear space.
pub const MAX_INDENT_DEPTH: usize = 32;

/// Debug printer for arena trees.
///
/// `label` renders one node; children are printed below it with `←` for the
/// left side and `→` for the right side. Walks with an explicit stack.
pub fn print<N, F>(arena: &[N], node: Option<u32>, tab: &str, label: &F) -> String
where
    N: Node,
    F: Fn(u32, &N) -> String,
{
    let mut out = String::new();
    // (node, depth, arrow); the root has no arrow.
    let mut stack: Vec<(Option<u32>, usize, Option<char>)> = vec![(node, 0, None)];
    while let Some((node, depth, arrow)) = stack.pop() {
        if let Some(arrow) = arrow {
            let levels = depth - 1;
            out.push('\n');
            out.push_str(tab);
            for _ in 0..levels.min(MAX_INDENT_DEPTH) {
                out.push_str("  ");
            }
            if levels > MAX_INDENT_DEPTH {
                out.push_str(&format!("[{depth}] "));
            }
            out.push(arrow);
            out.push(' ');
        }
        match node {
            None => out.push('∅'),
            Some(i) => {
                let n = &arena[i as usize];
                out.push_str(&label(i, n));
                if n.l().is_some() || n.r().is_some() {
                    stack.push((n.r(), depth + 1, Some('→')));
                    stack.push((n.l(), depth + 1, Some('←')));
                }
            }
        }
    }
    out
}
