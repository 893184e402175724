pub mod compile_time {
    pub mod lexical {
        /// Maximum pattern length in characters accepted by `Lexer::create`
        /// SECURITY: bounds the memory held by a single character stream
        pub const MAX_PATTERN_LENGTH: usize = 1_048_576;

        /// Property names longer than this are truncated in log context
        pub const MAX_LOGGED_FRAGMENT_LENGTH: usize = 64;
    }

    pub mod logging {
        /// Maximum log message length before truncation
        pub const MAX_LOG_MESSAGE_LENGTH: usize = 4096;

        /// Maximum number of events kept by a `MemoryLogger`
        pub const MEMORY_LOGGER_CAPACITY: usize = 10_000;
    }
}
