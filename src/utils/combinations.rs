use log::debug;

/// Every sequence of length `slots` drawn from `alphabet` with repetition,
/// in lexicographic order of alphabet positions.
pub fn operator_combinations<T: Copy>(alphabet: &[T], slots: usize) -> Vec<Vec<T>> {
    debug!(
        "Generating combinations of {} slots over {} symbols",
        slots,
        alphabet.len()
    );

    let mut result: Vec<Vec<T>> = vec![Vec::with_capacity(slots)];
    for _ in 0..slots {
        result = result
            .into_iter()
            .flat_map(|prefix| {
                alphabet.iter().map(move |&symbol| {
                    let mut next = prefix.clone();
                    next.push(symbol);
                    next
                })
            })
            .collect();
    }

    debug!("Generated {} combinations", result.len());
    result
}

/// All orderings of `items`, positional: equal items still produce distinct
/// entries, so the result always has `items.len()!` elements.
///
/// This uses an iterative approach to avoid deep recursion.
pub fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    debug!("Generating permutations of {} items", items.len());

    let mut result = Vec::new();
    let mut stack: Vec<(Vec<T>, Vec<T>)> =
        vec![(Vec::with_capacity(items.len()), items.to_vec())];

    while let Some((prefix, remaining)) = stack.pop() {
        if remaining.is_empty() {
            result.push(prefix);
            continue;
        }

        // Pushed in reverse so the first item is expanded first
        for idx in (0..remaining.len()).rev() {
            let mut next_prefix = prefix.clone();
            let mut next_remaining = remaining.clone();
            next_prefix.push(next_remaining.remove(idx));
            stack.push((next_prefix, next_remaining));
        }
    }

    debug!("Generated {} permutations", result.len());
    result
}
