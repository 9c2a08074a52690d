use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

pub const QUOTES: [Quote; 8] = [
    Quote {
        text: "The only way to do great work is to love what you do.",
        author: "Steve Jobs",
    },
    Quote {
        text: "Success is not final, failure is not fatal: it is the courage to continue that counts.",
        author: "Winston Churchill",
    },
    Quote {
        text: "Believe you can and you're halfway there.",
        author: "Theodore Roosevelt",
    },
    Quote {
        text: "The future belongs to those who believe in the beauty of their dreams.",
        author: "Eleanor Roosevelt",
    },
    Quote {
        text: "Do what you can, with what you have, where you are.",
        author: "Theodore Roosevelt",
    },
    Quote {
        text: "Everything you've ever wanted is on the other side of fear.",
        author: "George Addair",
    },
    Quote {
        text: "It always seems impossible until it's done.",
        author: "Nelson Mandela",
    },
    Quote {
        text: "Don't watch the clock; do what it does. Keep going.",
        author: "Sam Levenson",
    },
];

/// Uniform pick from the fixed list. Called exactly once per session; the
/// selection never re-rolls afterwards.
pub fn pick_quote() -> Quote {
    QUOTES[rand::rng().random_range(0..QUOTES.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_returns_member_of_list() {
        for _ in 0..50 {
            let quote = pick_quote();
            assert!(QUOTES.contains(&quote));
        }
    }

    #[test]
    fn test_list_has_no_blank_entries() {
        for quote in QUOTES {
            assert!(!quote.text.is_empty());
            assert!(!quote.author.is_empty());
        }
    }
}
