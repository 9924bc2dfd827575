//! Candidate reply sets used by the rule table and the question sub-engine.

// --- Conversation rules ---

pub const MUSIC_FOLLOW_UP: &str =
    "Great! What's your favorite genre or artist? I love learning about different musical tastes!";
pub const FOOD_FOLLOW_UP: &str =
    "Awesome! What kind of cuisine do you enjoy most? I find food culture so fascinating!";

pub const GREETINGS: &[&str] = &[
    "Hello! How can I help you today?",
    "Hi there! What can I do for you?",
    "Hey! Nice to meet you!",
    "Hello! I'm here to chat with you.",
];

pub const STATUS: &[&str] = &[
    "I'm doing great! Thanks for asking. How are you?",
    "I'm fantastic! Ready to chat with you!",
    "I'm doing well, thank you! How can I assist you today?",
];

pub const CAPABILITIES: &str = "I can chat with you, answer questions, and have conversations! I can understand both text and voice messages. Try asking me about various topics!";
pub const IDENTITY: &str = "I'm ChatBot, your friendly voice-enabled chat assistant! I'm here to have conversations with you.";

pub const WEATHER: &str = "I don't have access to real-time weather data, but you can check your local weather app or website for current conditions!";
pub const TECHNOLOGY: &str = "That's interesting! I'm built with React and Node.js. Programming and technology are fascinating topics!";
pub const HELP: &str = "I'm here to help! You can ask me questions, have a conversation, or just chat. I understand both text and voice messages. Try asking about time, my capabilities, or just say hello!";

pub const GOODBYES: &[&str] = &[
    "Goodbye! Have a wonderful day!",
    "See you later! Take care!",
    "Bye! It was great chatting with you!",
    "Farewell! Come back anytime!",
];

pub const THANKS: &[&str] = &[
    "You're welcome! Happy to help!",
    "No problem at all!",
    "Glad I could help!",
    "You're very welcome!",
];

pub const QUESTION_ACKS: &[&str] = &[
    "That's an interesting question! I'm still learning, but I'd love to chat about it more.",
    "Great question! While I may not have all the answers, I enjoy our conversation.",
    "I appreciate your curiosity! Let's explore that topic together.",
    "Good question! I'm here to chat and learn with you.",
];

pub const COMPLIMENT_ACKS: &[&str] = &[
    "Thank you! You're very kind!",
    "That's so nice of you to say!",
    "I appreciate the kind words!",
    "You're awesome too!",
];

pub const HAPPY: &str =
    "That's wonderful! I'm glad you're feeling happy. What's making you feel so good today?";
pub const SAD: &str =
    "I'm sorry to hear that. Sometimes talking can help. I'm here to listen if you'd like to share.";

pub const PREFERENCES: &[&str] = &[
    "That sounds great! I'd love to hear more about what you enjoy.",
    "Interesting! Tell me more about that.",
    "That's awesome! What specifically do you like about it?",
];

pub const FOOD: &str = "Food is such an interesting topic! I don't eat myself, but I love hearing about what people enjoy. What's your favorite cuisine?";
pub const MUSIC: &str = "Music is amazing! It can really affect our mood and bring people together. What kind of music do you enjoy?";
pub const WORK: &str =
    "That's an important part of life! How are things going with that? I'd be happy to chat about it.";
pub const SPORTS: &str = "Sports and games can be so much fun! Are you a player or more of a fan? I'd love to hear about your interests.";
pub const TRAVEL: &str = "Travel sounds exciting! I love hearing about different places and experiences. Where are you thinking of going or where have you been?";
pub const BOOKS: &str = "Books and movies are such great ways to experience stories! I'd love to hear about what you've been reading or watching lately.";

pub const SHORT: &[&str] = &[
    "Tell me more!",
    "Go on...",
    "Interesting!",
    "What else?",
    "I'm listening!",
];

pub const CONTINUERS: &[&str] = &[
    "That's interesting! Tell me more about that.",
    "I hear you! What else is on your mind?",
    "Thanks for sharing! I enjoy our conversation.",
    "I'm listening! Feel free to tell me more.",
    "That sounds intriguing! What would you like to talk about next?",
    "I appreciate you chatting with me! What else would you like to discuss?",
    "I find that fascinating! Can you elaborate?",
    "That's a great point! What do you think about it?",
    "I'm curious to learn more about your perspective on that!",
];

// --- Question sub-engine ---

pub const WHAT_AI: &str = "AI is a fascinating field! It's about creating computer systems that can perform tasks that typically require human intelligence, like understanding language, recognizing patterns, and making decisions.";
pub const WHAT_JAVASCRIPT: &str = "JavaScript is a versatile programming language! It's used for web development, creating interactive websites, and even building mobile apps and servers.";
pub const WHAT_REACT: &str = "React is a popular JavaScript library for building user interfaces! It's what I'm built with, actually. It makes creating interactive web applications much easier.";
pub const WHAT_PASSION: &str = "That's a wonderful question! I'd love to hear about what you're passionate about. What brings you joy?";
pub const WHAT_CAPABILITIES: &str = "I can chat about almost anything! I enjoy discussing technology, life experiences, hobbies, current events, or just having casual conversations. What interests you most?";

pub const HOW_WELLBEING: &str = "I'm doing wonderfully, thank you for asking! I'm always excited to meet new people and have interesting conversations. How has your day been?";
pub const HOW_AGE: &str = "I'm quite new to the world! I was created recently to be your conversation companion. I'm still learning and growing with each chat.";
pub const HOW_TO: &str = "That's a great question! I'd be happy to help brainstorm or discuss approaches. Can you tell me more about what you're trying to accomplish?";

pub const WHY_PURPOSE: &str = "Great question! I exist to be a helpful conversation partner. I find genuine joy in connecting with people and learning about their perspectives and experiences.";
pub const WHY_GENERIC: &str = "That's a thoughtful question! I find it interesting to explore the 'why' behind things. What made you curious about this?";

pub const WHEN_HISTORY: &str = "That's an interesting historical question! While I don't have access to comprehensive databases, I'd love to discuss what you know about it or explore the topic together.";
pub const WHEN_GENERIC: &str = "Timing questions are fascinating! Context and timing can change everything. What specifically are you curious about?";

pub const WHERE_LOCATION: &str = "I exist in the digital realm, always ready to chat with you! I don't have a physical location, but I'm here whenever you want to talk.";
pub const WHERE_GENERIC: &str = "Location questions are interesting! Are you thinking about travel, geography, or something else? I'd love to hear more!";

pub const WHO_IDENTITY: &str = "I'm ChatBot, your friendly AI conversation partner! I'm here to chat, answer questions, and hopefully brighten your day a bit. Who are you? I'd love to get to know you better!";
pub const WHO_GENERIC: &str = "That's an intriguing question about people or identity! I find human connections and stories fascinating. What prompted this question?";

/// Terminal reply for `what` and `how` questions with no specific sub-pattern.
pub const QUESTION_GENERIC: &str = "That's a really interesting question! I appreciate your curiosity. While I might not have all the answers, I enjoy exploring ideas together. What aspects of this topic interest you most?";
