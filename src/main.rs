use vector_metrics::core::ranking::{apk, mapk};
use vector_metrics::core::similarity::{
    cosine_similarity, euclidean_distance, euclidean_similarity, pearson_similarity,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Vector Metrics Demo ===");

    // 1. Distance and similarity
    println!("\n[1] Euclidean Metrics...");
    let x = vec![0.0, 0.0];
    let y = vec![3.0, 4.0];
    println!("    x = {:?}, y = {:?}", x, y);
    println!("    distance   = {:.4}", euclidean_distance(&x, &y)?);
    println!("    similarity = {:.4}", euclidean_similarity(&x, &y)?);

    // 2. Correlation
    println!("\n[2] Correlation...");
    let a = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let b = vec![2.0, 4.1, 5.9, 8.2, 10.0];
    println!("    a = {:?}", a);
    println!("    b = {:?}", b);
    println!("    pearson = {:.4}", pearson_similarity(&a, &b)?);
    println!("    cosine  = {:.4}", cosine_similarity(&a, &b)?);

    // 3. Ranking evaluation
    println!("\n[3] Ranking Evaluation...");
    let actual = vec![vec![1, 2], vec![3]];
    let predicted = vec![vec![1, 2, 3], vec![3, 4, 5]];
    println!("    actual    = {:?}", actual);
    println!("    predicted = {:?}", predicted);
    println!("    AP@2 (query 0) = {:.4}", apk(&actual[0], &predicted[0], 2)?);
    println!("    AP@2 (query 1) = {:.4}", apk(&actual[1], &predicted[1], 2)?);
    println!("    mAP@2          = {:.4}", mapk(&actual, &predicted, 2)?);

    println!("\n=== Demo Complete ===");
    Ok(())
}
