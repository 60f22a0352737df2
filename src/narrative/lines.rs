//! Narrative text tables.
//!
//! Templates use `{name1}`, `{name2}` and `{pct}` placeholders.

use crate::core::OutcomeCategory;

/// Ten-year prediction template
#[derive(Debug, Clone, Copy)]
pub struct PredictionTemplate {
    pub title: &'static str,
    pub lifestyle: &'static str,
    pub prediction: &'static str,
}

pub fn mocking_lines(outcome: OutcomeCategory) -> &'static [&'static str; 5] {
    match outcome {
        OutcomeCategory::Friends => &[
            "💀 BRUTAL TRUTH: {name1} and {name2} are JUST friends! Someone's living in denial! 😅",
            "{pct}% friendship compatibility means {name1} is permanently FRIEND-ZONED! RIP romantic dreams! ⚰️",
            "{name2} sees {name1} as their emotional support buddy, not dating material! Time to move on! 🚚",
            "Congratulations {name1}! You've won \"Best Supporting Character\" in {name2}'s love story! 🎭",
            "{name1}, you're like a sibling to {name2}... and we all know how THAT ends! 🤢",
        ],
        OutcomeCategory::Love => &[
            "🔥 {name1} and {name2} think they're in love! Cute, but wait until the honeymoon phase ends! 💔",
            "{pct}% love compatibility! Someone's about to learn what \"irreconcilable differences\" means! ⚖️",
            "Love is in the air... along with future arguments about whose turn it is to do the dishes! 🍽️💥",
            "Aww, {name1} and {name2} are \"in love\"! Give it 3 months before someone's crying online! 📱😭",
            "Love at {pct}%? Cute! Wait until you see each other without the filters! 💄📸",
        ],
        OutcomeCategory::Affection => &[
            "😬 {name1} and {name2} have \"affection\", the participation trophy of relationships! 🏆",
            "{pct}% affection! You're the human equivalent of room temperature water! 💧😐",
            "Sweet affection detected! Translation: boring but harmless, like elevator music! 🎵💤",
            "Affection? That's what you call it when you're too scared to say \"friend zone\"! 🤡",
            "{name1} and {name2} have the romantic intensity of a wet napkin! Thrilling! 🧻",
        ],
        OutcomeCategory::Marriage => &[
            "💍 MARRIAGE?! {name1} and {name2} are ready to legally bind their dysfunction! Good luck! ⚖️💀",
            "{pct}% marriage compatibility! Enjoy 50 years of passive-aggressive comments! 😤",
            "Wedding bells are ringing... or is that the sound of your freedom fading? 🔔⚰️",
            "Marriage material? Someone's about to learn why divorce lawyers exist! 👨‍💼💸",
            "{name1} and {name2} want to get married! The divorce attorneys are already celebrating! 🍾⚖️",
        ],
        OutcomeCategory::Enemies => &[
            "⚔️ ENEMIES! Finally, some honesty! {name1} and {name2} bring out each other's worst! 👹",
            "{pct}% enemy compatibility! You two would argue about the weather! ⛈️🤬",
            "Enemies detected! Even your WiFi would choose sides in this relationship! 📶💥",
            "{name1} and {name2} are enemies! At least you're honest about it! 🤷‍♀️",
            "Enemy level: {pct}%! You two make oil and water look compatible! 🛢️💧",
        ],
        OutcomeCategory::Single => &[
            "🙋‍♀️ {name1} is staying SINGLE! {name2} would rather date their reflection! 🪞💔",
            "{pct}% single energy! Time to adopt 17 cats and call it a day! 🐱🐱🐱",
            "Single forever! At least your streaming account won't judge your life choices! 📺💸",
            "{name1}, looks like you're destined for a lifetime of \"it's complicated\"! 📱💔",
            "Single at {pct}%! Even dating apps would swipe left on this combination! 📱👈",
        ],
    }
}

pub fn roast_sets(outcome: OutcomeCategory) -> &'static [&'static [&'static str]; 3] {
    match outcome {
        OutcomeCategory::Friends => &[
            &[
                "{name1}, you're basically {name2}'s emotional support human. Congratulations! 🎉",
                "You'll hear about their dating adventures while you cry into your pillow at night 😭",
                "You're the one they call to move furniture, not to go on a date 📦",
                "Your {pct}% friendship score locks the friend zone PERMANENTLY! 🔒",
            ],
            &[
                "{name1}, you've been promoted to \"Best Friend\", the kiss of death for romance! 💋💀",
                "{name2} probably introduces you as \"like family to me\". OUCH! 🤕",
                "{pct}% friendship means you'll be their wedding guest, not their spouse! 💒👥",
                "Time to update your profile: \"Professional friend-zone resident\" 📱",
            ],
            &[
                "Congratulations {name1}! You've achieved \"Platonic Soulmate\" status! ⚰️",
                "You're who {name2} texts at 2 AM about problems with OTHER people! 📱🌙",
                "{pct}% friendship compatibility = 0% romantic potential! Math doesn't lie! 🧮",
                "Welcome to the friend zone hall of fame, population: YOU! 🏛️",
            ],
        ],
        OutcomeCategory::Love => &[
            &[
                "Oh look, {name1} and {name2} think they're in a fairy tale! How adorable! 🧚‍♀️",
                "{pct}% love compatibility? Cute, but wait until reality hits! 💥",
                "You'll probably break up over dishes left in the sink 🍽️",
                "Give it 6 months before someone asks their friends \"what went wrong\" 😢",
            ],
            &[
                "{name1} and {name2} are \"in love\", meaning hormones are clouding judgment! 🧠☁️",
                "{pct}% love means fights about everything from toothpaste tubes to what to watch! 🦷📺",
                "Love is blind, but your friends can see this trainwreck coming! 🚂💥",
                "Enjoy the butterflies while they last, the eye rolls are coming! 🦋🙄",
            ],
            &[
                "{name1} and {name2} think they've found \"the one\". Statistically, they haven't! 📊",
                "Love at {pct}%? Wait until you live together and discover the REAL habits! 🏠😱",
                "This \"love\" survives exactly until the first disagreement about money! 💰⚔️",
                "Love is temporary, the therapy bills are permanent! 💊💸",
            ],
        ],
        OutcomeCategory::Affection => &[
            &[
                "Congratulations! You've earned the relationship participation award! 🎖️",
                "{pct}% affection means \"nice\" but not \"I need you in my life\" 😐",
                "{name2} probably describes {name1} as \"sweet\" (translation: BORING) 😴",
                "Good morning texts, left on read for 3 hours 📱",
            ],
            &[
                "{name1} and {name2} have \"affection\", the vanilla ice cream of relationships! 🍦",
                "{pct}% affection means safe, predictable and utterly forgettable! 😴",
                "All the passion of a corporate team-building exercise! 👔",
                "Maximum mediocrity in romance achieved! 🏆😐",
            ],
            &[
                "Affection at {pct}%? The relationship equivalent of elevator music! 🎵😴",
                "{name1} and {name2} have the romantic spark of a wet matchstick! 🔥💧",
                "You're the couple that makes other people appreciate being single! 🙋‍♀️",
                "A wild night for you two is picking a different show to watch! 📺",
            ],
        ],
        OutcomeCategory::Marriage => &[
            &[
                "{pct}% marriage compatibility? Someone's living in a fantasy world! 🏰",
                "You'll fight over the thermostat for 50 years 🌡️",
                "{name1}, hope you enjoy hearing {name2} chew for the rest of your life! 🍎",
                "Marriage means legally binding yourself to someone who steals your fries! 🍟⚖️",
            ],
            &[
                "Marriage? {name1} and {name2} want to make their dysfunction LEGAL! 📜⚖️",
                "{pct}% marriage compatibility = 100% passive-aggressive dinner conversations! 🍽️😤",
                "From \"I do\" to \"I don't anymore\" faster than you can say \"prenup\"! 💍💔",
                "Till death do us part? More like till the passwords get changed! 📺🔐",
            ],
            &[
                "{name1} and {name2} think marriage will fix their problems. Spoiler: it won't! 🔧❌",
                "{pct}% marriage material? The divorce rate would like a word! 📊⚖️",
                "You'll spend more on couples therapy than on the wedding! 💒💸",
                "Decades of arguing about whose turn it is to take out the trash! 🗑️⏰",
            ],
        ],
        OutcomeCategory::Enemies => &[
            &[
                "{pct}% enemy compatibility, now THIS is accurate! 🎯",
                "You two would argue about the color of the sky ☁️",
                "{name1} and {name2} bring out the absolute WORST in each other! 👹",
                "Even your pets would choose sides! 🐕🐈",
            ],
            &[
                "Enemies at {pct}%! Like oil and water, but WORSE! 🛢️💧",
                "{name1} and {name2} could start a fight in an empty room! 🏠⚔️",
                "More red flags than a parade! 🚩🚩🚩",
                "Proof that opposites don't attract, they REPEL! 🧲❌",
            ],
            &[
                "{pct}% enemy compatibility! A walking disaster movie! 🎬💥",
                "{name1} and {name2} have the chemistry of bleach and ammonia. TOXIC! ☠️",
                "You'd argue during a zombie apocalypse! 🧟‍♂️⚔️",
                "Some people should come with warning labels! ⚠️",
            ],
        ],
        OutcomeCategory::Single => &[
            &[
                "{pct}% single energy, the universe is telling you to give up! 🌌",
                "{name1}, {name2} would rather date a cactus! 🌵",
                "Destined to be the third wheel at every gathering 🚲",
                "At least pizza will never disappoint you like humans do! 🍕❤️",
            ],
            &[
                "Single at {pct}%! {name1}, even dating apps would reject this match! 📱❌",
                "{name2} would rather be alone forever than settle for {name1}! 🏝️",
                "Your love life has less activity than a cemetery at midnight! ⚰️🌙",
                "You'll bring a book to weddings instead of a plus-one! 📖💒",
            ],
            &[
                "{pct}% single forever! {name1}, time for the cat person lifestyle! 🐱👤",
                "{name2} finds {name1} as appealing as expired milk! 🥛🤢",
                "Time to invest in a good therapist and several houseplants! 🌱👨‍⚕️",
                "Single life chose YOU, and it's not letting go! 🤝🔒",
            ],
        ],
    }
}

pub fn predictions(outcome: OutcomeCategory) -> &'static [PredictionTemplate; 3] {
    match outcome {
        OutcomeCategory::Friends => &[
            PredictionTemplate {
                title: "The Professional Best Friend 👫",
                lifestyle: "{name1} has turned being {name2}'s best friend into a full-time career, on speed dial for every crisis from breakfast cereal to 3 AM existential dread.",
                prediction: "{name1} will start a support group for people stuck in the friend zone. {name2} will join thinking it's a book club! 📚😅",
            },
            PredictionTemplate {
                title: "The Backup Plan Champion 🏆",
                lifestyle: "{name1} is everyone's backup plan, with a colour-coded calendar tracking 47 relationship statuses. {name2} is still on it.",
                prediction: "{name1} will go viral for \"Backup Plan Life Hacks\" and finally get the recognition they deserve! 📱✨",
            },
            PredictionTemplate {
                title: "The Friendship Influencers 📸",
                lifestyle: "{name1} and {name2} became \"friendship goals\" influencers with 2 million followers. {name1} is still secretly in love; {name2} still has no clue.",
                prediction: "The truth comes out during a live stream in front of 2 million viewers. The internet will never recover! 📺💥",
            },
        ],
        OutcomeCategory::Love => &[
            PredictionTemplate {
                title: "The Chaos Couple 🌪️",
                lifestyle: "{name1} and {name2} break up every Tuesday and get back together every Friday like clockwork.",
                prediction: "They'll either get a reality show called \"Love is a Battlefield\" or accidentally achieve world peace! 🌍✌️",
            },
            PredictionTemplate {
                title: "The Competitive Lovers 🏁",
                lifestyle: "{name1} and {name2} compete over everything: who loves more, who remembers anniversaries, who cries harder at movies.",
                prediction: "They'll win a couples game show and spend the prize on separate wings of the house. Love finds a way! 🏠💕",
            },
            PredictionTemplate {
                title: "The Love Scientists 🧪",
                lifestyle: "{name1} and {name2} track heart rates, optimal hug duration and the compliment-to-criticism ratio on colour-coded charts.",
                prediction: "They'll discover the formula for perfect love and become billionaires selling it! 🔬💰",
            },
        ],
        OutcomeCategory::Affection => &[
            PredictionTemplate {
                title: "The Beige Dynasty 🏠",
                lifestyle: "{name1} and {name2} are so perfectly average that museums study their lifestyle. Every room is a different shade of beige.",
                prediction: "Their presence will turn out to induce instant calm, making them accidental meditation gurus! 🧘‍♀️✨",
            },
            PredictionTemplate {
                title: "The Comfort Zone Champions 🛋️",
                lifestyle: "{name1} and {name2} haven't left the neighbourhood in 5 years. Adventure means ordering from a new restaurant.",
                prediction: "They'll open a \"Comfort Resort\" for stressed people. Relaxation empire incoming! 🏨😴",
            },
            PredictionTemplate {
                title: "The Wholesome Creators 📹",
                lifestyle: "{name1} and {name2} went viral for being the most wholesome couple online. Their biggest scandal was store-bought cookies.",
                prediction: "They'll be so genuinely nice that the trolls reform and take up gardening! 🌍🌻",
            },
        ],
        OutcomeCategory::Marriage => &[
            PredictionTemplate {
                title: "The Over-Planners United 📋",
                lifestyle: "{name1} and {name2} run their house on spreadsheets, including scheduled spontaneous moments and a 50-year lawn plan.",
                prediction: "They'll be hired to organise peace talks and succeed because nobody wants to argue with their spreadsheets! 📊🕊️",
            },
            PredictionTemplate {
                title: "The Competitive Married Couple 🏆",
                lifestyle: "{name1} and {name2} hold monthly performance reviews and keep a neighbour on retainer as marriage referee.",
                prediction: "They'll win \"World's Most Competitive Couple\" and challenge everyone in the audience to a marriage-off! 🎮💍",
            },
            PredictionTemplate {
                title: "The Accidental Empire Builders 🏰",
                lifestyle: "{name1} and {name2} gave marriage advice as a joke and became millionaire relationship gurus with no idea how.",
                prediction: "They'll finally admit on live TV that they've been winging it the whole time! 📚🎤",
            },
        ],
        OutcomeCategory::Enemies => &[
            PredictionTemplate {
                title: "The Professional Arguers ⚔️",
                lifestyle: "{name1} and {name2} turned arguing into a career and soundproofed the house so they can do it at full volume.",
                prediction: "They'll become the world's first Argument Consultants and settle international disputes! 🌍⚖️",
            },
            PredictionTemplate {
                title: "The Chaos Coordinators 🌪️",
                lifestyle: "{name1} and {name2} rearrange the furniture weekly because they can't agree on where anything goes.",
                prediction: "Their \"Chaos Consulting\" business will single-handedly cure world boredom! 🎭✨",
            },
            PredictionTemplate {
                title: "The Unlikely Peace Ambassadors 🕊️",
                lifestyle: "Years of fighting taught {name1} and {name2} to resolve ANY conflict. World leaders now visit their garden to settle disputes.",
                prediction: "They'll win a Nobel Peace Prize and give the most chaotic acceptance speech in history! 🏆🌍",
            },
        ],
        OutcomeCategory::Single => &[
            PredictionTemplate {
                title: "The Professional Single Person 🙋‍♀️",
                lifestyle: "{name1} became a Single Life Consultant. {name2} moved to Antarctica to study penguins and avoid all humans.",
                prediction: "{name1} will become a self-help billionaire and {name2} will be elected mayor by the penguins! 🐧👑",
            },
            PredictionTemplate {
                title: "The Accidental Hermits 🏔️",
                lifestyle: "{name1} and {name2} live on opposite sides of the same mountain and talk only through smoke signals about the weather.",
                prediction: "They'll meet at the peak in 20 years, realise they're perfect for each other, and move to opposite ends of the Earth! 🏔️😂",
            },
            PredictionTemplate {
                title: "The Single Success Stories 🌟",
                lifestyle: "{name1} became a motivational speaker on self-love. {name2} charges by the hour to teach people to enjoy their own company.",
                prediction: "Both will be happier than any couple ever! 📚⛪",
            },
        ],
    }
}
