/// A comment of `mentions` review thanks, one mention each.
#[allow(dead_code)]
pub fn generate_comment(mentions: usize) -> String {
    let mut value = String::new();
    for i in 0..mentions {
        value.push_str(&format!("thanks @[Person {i}]({i}) for the review, "));
    }
    value
}
