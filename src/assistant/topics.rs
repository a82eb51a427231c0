//! Canned topic templates and the keyword table that selects them.
//!
//! The table is evaluated top to bottom and the first topic whose keyword set matches wins.
//! Topics are never combined.

use crate::models::Topic;

/// Fixed answer bundle for one topic
#[derive(Debug)]
pub struct TopicTemplate {
    pub topic: Topic,
    pub answer: &'static str,
    pub sources: &'static [&'static str],
    pub suggestions: [&'static str; 4],
}

/// Keyword set paired with the template it selects
pub struct TopicRule {
    pub keywords: &'static [&'static str],
    pub template: &'static TopicTemplate,
}

impl TopicRule {
    /// `lowered_query` must already be lower-cased
    pub fn matches(&self, lowered_query: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered_query.contains(keyword))
    }
}

pub const DEFAULT_SOURCES: &[&str] = &[
    "American Veterinary Society of Animal Behavior - Position Statements",
    "American Kennel Club - Training Resources",
    "Association of Professional Dog Trainers - Humane Training Guidelines",
];

pub static SNIFFING: TopicTemplate = TopicTemplate {
    topic: Topic::Sniffing,
    answer: "Sniffing is how dogs read the world, so channel it rather than fight it:\n\n\
1. **Scent Work Games**: Hide treats around the home or yard and let your dog search. \
Mental work like this is often more tiring than physical exercise.\n\n\
2. **Structured Sniffing Walks**: Give dedicated \"sniff time\" on walks with a release cue. \
Around 15 minutes of sniffing can be as tiring as a 30-minute walk.\n\n\
3. **Puzzle Feeders**: Serve meals in food-dispensing toys to engage foraging instincts.\n\n\
4. **Short Training Sessions**: Five to ten minute sessions teaching new cues are mentally \
exhausting for young dogs.\n\n\
5. **Socialization**: Controlled exposure to new places, people and dogs adds stimulation \
while building confidence.",
    sources: &[
        "Journal of Veterinary Behavior - Canine Enrichment Study (2021)",
        "American Kennel Club - Puppy Development Guidelines",
        "Applied Animal Behaviour Science - Olfactory Stimulation in Dogs",
    ],
    suggestions: [
        "How to teach scent work to puppies",
        "Best puzzle toys for 5-month-old puppies",
        "Balancing physical and mental exercise for puppies",
        "Socialization timeline for puppies",
    ],
};

pub static BITING: TopicTemplate = TopicTemplate {
    topic: Topic::Biting,
    answer: "Mouthing is normal puppy behavior; the goal is teaching bite inhibition and better \
outlets:\n\n\
1. **Redirect to Toys**: Keep a tug or chew toy on hand and offer it the moment teeth touch \
skin.\n\n\
2. **End Play Calmly**: If biting continues, pause play for 10-20 seconds. Attention ending is \
the consequence.\n\n\
3. **Reward Calm Behavior**: Mark and reward moments when your puppy chooses a toy or settles.\n\n\
4. **Manage Overtiredness**: Many biting spells come from a puppy who needs a nap. Schedule \
rest in a crate or pen.\n\n\
5. **Avoid Physical Punishment**: Scruffing or holding the muzzle increases fear and can make \
biting worse.",
    sources: &[
        "Applied Animal Behaviour Science - Puppy Mouthing and Play Behavior",
        "American Veterinary Society of Animal Behavior - Puppy Socialization Position Statement",
        "Journal of Veterinary Behavior - Effects of Aversive Training Methods (2020)",
    ],
    suggestions: [
        "When do puppies stop teething?",
        "Best chew toys for teething puppies",
        "How to teach bite inhibition",
        "Is my puppy's biting aggression or play?",
    ],
};

pub static LEASH: TopicTemplate = TopicTemplate {
    topic: Topic::Leash,
    answer: "Loose-leash walking is a skill built in small steps:\n\n\
1. **Stop When the Leash Tightens**: Stand still whenever your dog pulls and move again once \
the leash slackens. Pulling should never get them where they want to go.\n\n\
2. **Reward the Position You Want**: Deliver treats at your side so walking next to you pays \
off.\n\n\
3. **Practice in Low Distraction Areas**: Start indoors or in a quiet yard before busy \
streets.\n\n\
4. **Use the Right Equipment**: A well-fitted front-clip harness reduces pulling leverage \
without causing pain.\n\n\
5. **Allow Sniff Breaks**: Let your dog sniff on cue as a reward for walking nicely.",
    sources: &[
        "Journal of Veterinary Behavior - Harness vs Collar Study (2019)",
        "American Kennel Club - Loose Leash Walking Guide",
        "Applied Animal Behaviour Science - Reinforcement Timing in Dog Training",
    ],
    suggestions: [
        "Front-clip harness vs collar for pulling",
        "How to stop leash reactivity",
        "Teaching heel with positive reinforcement",
        "How long should a puppy walk each day?",
    ],
};

pub static GENERAL: TopicTemplate = TopicTemplate {
    topic: Topic::General,
    answer: "Here are research-backed principles that apply to most training goals:\n\n\
1. **Positive Reinforcement**: Reward the behavior you want with food, play or praise. \
Reward-based methods produce faster learning and fewer stress signals.\n\n\
2. **Keep Sessions Short**: Several five to ten minute sessions a day beat one long session.\n\n\
3. **Be Consistent**: Everyone in the household should use the same cues and rules.\n\n\
4. **Build Gradually**: Add distance, duration and distraction one at a time.\n\n\
5. **Know When to Get Help**: For fear, anxiety or aggression, consult a certified trainer or \
veterinary behaviorist.",
    sources: DEFAULT_SOURCES,
    suggestions: [
        "How to crate train a puppy",
        "Teaching a reliable recall",
        "How to teach a dog to stay",
        "Choosing a certified dog trainer",
    ],
};

/// Keyword table in priority order
pub static TOPIC_RULES: [TopicRule; 3] = [
    TopicRule { keywords: &["sniff", "smell"], template: &SNIFFING },
    TopicRule { keywords: &["bite", "biting", "nip"], template: &BITING },
    TopicRule { keywords: &["leash", "pull", "walk"], template: &LEASH },
];

/// Template used when no rule matches
pub static FALLBACK: &TopicTemplate = &GENERAL;

/// Example questions offered before the first search
pub const EXAMPLE_QUESTIONS: [&str; 4] = [
    "How to stop puppy biting?",
    "Best way to crate train a dog?",
    "My dog pulls on the leash, what should I do?",
    "How to teach a dog to stay?",
];
