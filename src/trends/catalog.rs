use super::{TrendEntry, TrendSet};
use crate::types::report::Priority;

/// Catalog revision, bumped whenever the curated content changes.
pub const CATALOG_VERSION: &str = "2026-02";

pub fn latest() -> TrendSet {
    TrendSet {
        models: models(),
        frameworks: frameworks(),
        techniques: techniques(),
        tools: tools(),
        use_cases: use_cases(),
    }
}

fn models() -> Vec<TrendEntry> {
    vec![
        TrendEntry::new(
            "Llama 3.3 70B",
            "Meta; general purpose, coding, reasoning; open source via Groq API",
            Priority::High,
            "Strong default for self-hosted scoring and summarization",
        ),
        TrendEntry::new(
            "GPT-4 Turbo",
            "OpenAI; advanced reasoning, multimodal; API only",
            Priority::Medium,
            "Consider for complex analysis tasks",
        ),
        TrendEntry::new(
            "Claude 3.5 Sonnet",
            "Anthropic; long context, coding; API only",
            Priority::Medium,
            "Alternative for code review workloads",
        ),
        TrendEntry::new(
            "Qwen2.5-Coder",
            "Alibaba; code generation; open source via Ollama",
            Priority::High,
            "Excellent for local coding tasks",
        ),
        TrendEntry::new(
            "Gemini 2.0 Flash",
            "Google; fast inference, multimodal; free API tier",
            Priority::High,
            "Good for rapid prototyping",
        ),
    ]
}

fn frameworks() -> Vec<TrendEntry> {
    vec![
        TrendEntry::new(
            "LangChain",
            "LLM orchestration; building agents and chains",
            Priority::High,
            "Core dependency for agentic pipelines",
        ),
        TrendEntry::new(
            "CrewAI",
            "Multi-agent; role-based agent collaboration",
            Priority::High,
            "Fits dual-agent review/build splits",
        ),
        TrendEntry::new(
            "AutoGen",
            "Multi-agent; conversational agents",
            Priority::Medium,
            "Alternative for chat-based workflows",
        ),
        TrendEntry::new(
            "LlamaIndex",
            "RAG; document indexing and retrieval",
            Priority::High,
            "Add for knowledge base integration",
        ),
        TrendEntry::new(
            "Vercel AI SDK",
            "Frontend AI; streaming responses in web apps",
            Priority::High,
            "Use for SaaS products with chat interfaces",
        ),
    ]
}

fn techniques() -> Vec<TrendEntry> {
    vec![
        TrendEntry::new(
            "Agentic Workflows",
            "AI agents that plan, execute, and iterate",
            Priority::Critical,
            "Core pattern for autonomous products",
        ),
        TrendEntry::new(
            "RAG (Retrieval Augmented Generation)",
            "Enhance LLMs with external knowledge",
            Priority::High,
            "Pairs well with documentation search",
        ),
        TrendEntry::new(
            "Function Calling",
            "LLMs calling external tools and APIs",
            Priority::High,
            "Standard integration point for agent tools",
        ),
        TrendEntry::new(
            "Prompt Caching",
            "Cache prompts to reduce cost and latency",
            Priority::Medium,
            "Worth enabling for repeated operations",
        ),
        TrendEntry::new(
            "Structured Outputs",
            "Force LLMs to emit schema-valid JSON",
            Priority::High,
            "Use for reliable data extraction",
        ),
    ]
}

fn tools() -> Vec<TrendEntry> {
    vec![
        TrendEntry::new(
            "Cursor",
            "IDE; AI-first code editor",
            Priority::High,
            "Recommended development workflow",
        ),
        TrendEntry::new(
            "v0.dev",
            "UI generation; AI-powered component scaffolding",
            Priority::High,
            "Use for rapid frontend prototyping",
        ),
        TrendEntry::new(
            "Supabase",
            "Backend; open source Firebase alternative",
            Priority::Critical,
            "Fast path to auth, storage, and Postgres",
        ),
        TrendEntry::new(
            "Replicate",
            "Model hosting; run AI models via API",
            Priority::Medium,
            "For image and video generation features",
        ),
        TrendEntry::new(
            "Modal",
            "Serverless; GPU compute on demand",
            Priority::Medium,
            "For ML model deployment",
        ),
    ]
}

fn use_cases() -> Vec<TrendEntry> {
    vec![
        TrendEntry::new(
            "AI Coding Assistants",
            "Large market, high competition",
            Priority::High,
            "Niche specialization wins, e.g. specific frameworks",
        ),
        TrendEntry::new(
            "AI-Powered SaaS",
            "Massive market, medium competition",
            Priority::High,
            "Add AI features to existing SaaS products",
        ),
        TrendEntry::new(
            "Autonomous Agents",
            "Growing market, low competition",
            Priority::High,
            "Business process automation",
        ),
        TrendEntry::new(
            "AI Content Generation",
            "Large market, very high competition",
            Priority::Medium,
            "Specialized content such as technical docs",
        ),
        TrendEntry::new(
            "Personalization Engines",
            "Large market, medium competition",
            Priority::Medium,
            "E-commerce product recommendations",
        ),
    ]
}
