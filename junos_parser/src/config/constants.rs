pub mod compile_time {
    pub mod file_processing {
        /// Maximum file size allowed for processing (10MB)
        /// SECURITY: Prevents DoS via oversized configuration dumps
        pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

        /// Threshold for considering a file "large" (1MB)
        /// PERFORMANCE: Large files switch to reduced per-line logging
        pub const LARGE_FILE_THRESHOLD: u64 = 1024 * 1024;

        /// Maximum number of lines accepted in one configuration file
        pub const MAX_LINE_COUNT: usize = 200_000;
    }

    pub mod lexical {
        /// Maximum length of a single bare word
        /// SECURITY: Prevents pathological single-token inputs
        pub const MAX_WORD_LENGTH: usize = 1024;

        /// Maximum length of a double-quoted word (descriptions, paths)
        pub const MAX_QUOTED_LENGTH: usize = 4096;

        /// Maximum comment length (# to end of line)
        pub const MAX_COMMENT_LENGTH: usize = 4096;

        /// Maximum total token count per file
        pub const MAX_TOKEN_COUNT: usize = 4_000_000;
    }

    pub mod syntax {
        /// Maximum words on one set line; Junos itself stays far below this
        pub const MAX_WORDS_PER_LINE: usize = 128;

        /// Syntax error history retained for diagnostics
        pub const MAX_ERROR_HISTORY: usize = 64;
    }

    pub mod hierarchy {
        /// Maximum hierarchy tree depth
        /// SECURITY: Caps recursion in group/wildcard expansion
        pub const MAX_TREE_DEPTH: usize = 32;

        /// Maximum lines a single apply-groups expansion may synthesize
        pub const MAX_GROUP_EXPANSION_LINES: usize = 500_000;

        /// Maximum lines wildcard application may synthesize
        pub const MAX_WILDCARD_EXPANSION_LINES: usize = 500_000;

        /// Maximum number of distinct groups per file
        pub const MAX_GROUPS: usize = 1024;
    }

    pub mod extraction {
        /// Maximum warnings retained by a single extraction run
        pub const MAX_WARNINGS: usize = 10_000;
    }

    pub mod logging {
        /// Maximum events retained by the global error collector
        pub const MAX_ERROR_COLLECTION: usize = 10_000;

        /// In-memory logger ring buffer size
        pub const LOG_BUFFER_SIZE: usize = 5_000;

        /// Default minimum log level (0=error .. 3=debug)
        pub const MIN_LOG_LEVEL: u8 = 3;
    }
}
