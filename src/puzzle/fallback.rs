/// Known-solvable 4-tuples used when the randomized generator exceeds its
/// retry budget. Every entry has been verified to make 24.
pub const FALLBACK_SETS: [[i32; 4]; 16] = [
    [1, 2, 3, 4],   // 1 × 2 × 3 × 4
    [2, 2, 6, 1],   // 2 × 2 × 6 × 1
    [3, 8, 1, 1],   // 3 × 8 × 1 × 1
    [4, 6, 1, 1],   // 4 × 6 × 1 × 1
    [2, 12, 1, 1],  // 2 × 12 × 1 × 1
    [5, 5, 5, 1],   // (5 - 1 ÷ 5) × 5
    [4, 4, 4, 4],   // 4 × 4 + 4 + 4
    [6, 6, 6, 6],   // 6 + 6 + 6 + 6
    [3, 3, 3, 3],   // 3 × 3 × 3 - 3
    [8, 8, 3, 3],   // 8 ÷ (3 - 8 ÷ 3)
    [2, 2, 2, 3],   // 2 × 2 × 2 × 3
    [5, 4, 3, 2],   // (5 + 4 + 3) × 2
    [6, 4, 2, 2],   // 6 × 4 × 2 ÷ 2
    [7, 3, 1, 1],   // (7 + 1) × 3 × 1
    [2, 6, 3, 1],   // 2 × 6 × (3 - 1)
    [8, 4, 2, 1],   // 8 × (4 - 2 + 1)
];
