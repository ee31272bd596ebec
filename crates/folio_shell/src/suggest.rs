//! 未知命令的 "Did you mean" 候选

/// 候选上限
pub const MAX_SUGGESTIONS: usize = 3;

/// 以输入开头、包含输入或编辑距离不超过 2 的命令词, 最多三个
pub fn suggestions<'a>(tokens: &[&'a str], input: &str) -> Vec<&'a str> {
    tokens
        .iter()
        .copied()
        .filter(|token| {
            token.starts_with(input) || token.contains(input) || levenshtein(input, token) <= 2
        })
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// 按字符计算的编辑距离
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j] + cost).min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}
