//! Static README sections.
//!
//! These are process-wide constants, not a templating system; the header
//! carries the single placeholder token the assembler substitutes with the
//! rendered structure block.

/// Placeholder token in [`HEADER`] replaced by the rendered structure.
pub const STRUCTURE_PLACEHOLDER: &str = "{{REPOSITORY_STRUCTURE}}";

pub const HEADER: &str = r"# Copilot Kit

A comprehensive collection of language-agnostic templates and structured prompts for GitHub Copilot that can be customized for any programming language and project type. This repository provides a systematic approach to AI-assisted development with standardized workflows, coding guidelines, and specialized prompts.

## Overview

This template system enables consistent, high-quality code generation through:

- **Structured Instructions**: Comprehensive coding standards and best practices
- **Specialized Prompts**: Task-specific prompts for common development workflows
- **Chat Modes**: AI personas for specific development tasks
- **Workflow Automation**: Standardized processes for commits, reviews, and documentation
- **Quality Assurance**: Built-in guidelines for testing, security, and performance

## Repository Structure

{{REPOSITORY_STRUCTURE}}";

pub const INSTRUCTIONS_SECTION: &str = r"## 📋 Instructions

The `.github/instructions/` directory contains core instruction templates that establish fundamental development standards and workflows. These files guide GitHub Copilot on how to approach different technologies and coding practices consistently across your project.

**Key Categories:**
- **Language-Specific**: Angular, Python, TypeScript, C#, etc.
- **Framework-Specific**: Next.js, ASP.NET, Azure Functions, etc.
- **Process-Focused**: Commit messages, code reviews, debugging, security

**Purpose**: These instructions ensure that Copilot generates code that follows your team's standards, best practices, and architectural decisions. They're automatically applied to relevant file types and provide consistent guidance across your entire development workflow.";

pub const INSTRUCTIONS_USAGE: &str = r"> 💡 **Usage**: Copy relevant instruction files to your project's `.github/instructions/` directory. VS Code will automatically apply them based on file types and contexts.";

pub const PROMPTS_SECTION: &str = r"## 🎯 Prompts

The `.github/prompts/` directory contains specialized prompt templates for common development scenarios and specific tasks. These are reusable prompts that can be invoked to perform particular actions or generate specific types of code.

**Key Categories:**
- **Development Workflows**: Setup, scaffolding, cleanup, deployment
- **Database Operations**: Schema design, migrations, seeding
- **Quality Assurance**: Testing, security analysis, performance optimization
- **Documentation**: API docs, technical writing, code explanation

**Purpose**: These prompts eliminate repetitive prompt writing and provide consistent, well-structured approaches to common development tasks. They can be customized with variables and chained together for complex workflows.";

pub const PROMPTS_USAGE: &str = r"> 💡 **Usage**: Copy prompt files to your project's `.github/prompts/` directory or VS Code user prompts folder. Invoke them using `/prompt-name` in Copilot Chat.";

pub const CHATMODES_SECTION: &str = r"## 🧩 Chat Modes

The `.github/chatmodes/` directory contains custom chat modes that define specific AI behaviors, available tools, and interaction patterns. Each chat mode creates a specialized assistant for particular development tasks.

**Key Categories:**
- **Role-Based**: Product Manager (PRD), Database Administrator, Prompt Engineer
- **Task-Focused**: Debugging, Planning, Requirements Refinement
- **Specialized**: Performance optimization, security analysis

**Purpose**: Chat modes provide context-aware assistance by defining the AI's role, available tools, and behavioral patterns. They create focused, expert-level assistance for specific development scenarios and workflows.";

pub const CHATMODES_USAGE: &str = r"> 💡 **Usage**: Copy chat mode files to your project's `.github/chatmodes/` directory. Configure them in VS Code using `Chat: Configure Chat Modes...` command.";

pub const FOOTER: &str = r#"## Installation

### Manual Installation

Clone the repository and copy the `.github` folder to your project:

```bash
# Clone the repository
git clone https://github.com/copilot-kit/copilot-kit.git

# Copy to your project
cp -r copilot-kit/.github your-project/
```

### Using as a Template

You can also use this repository as a GitHub template:

1. Click "Use this template" on the GitHub repository page
2. Create a new repository from the template
3. Clone your new repository
4. Copy the `.github` folder to your existing projects as needed

## Quick Start

1. **Choose Your Language**: Copy relevant instruction files for your tech stack
2. **Customize Settings**: Update project-specific configurations in each file
3. **Configure VS Code**: Add prompts to your VS Code settings or workspace
4. **Start Coding**: Reference instructions through GitHub Copilot Chat

## Best Practices

### Implementation Guidelines

- **Start Small**: Begin with core instructions and add specialized prompts gradually
- **Iterate Often**: Regularly update instructions based on project evolution
- **Team Alignment**: Ensure all team members understand and follow the standards
- **Documentation**: Keep instructions current with your project's development

### Quality Assurance

- **Regular Reviews**: Periodically review and update instruction effectiveness
- **Feedback Loop**: Collect team feedback on instruction clarity and usefulness
- **Consistency**: Maintain consistent formatting and structure across all files
- **Version Control**: Track changes to instructions alongside code changes

## Contributing

1. Fork this repository
2. Create a feature branch for your changes
3. Update or add instruction/prompt files
4. Test with your development workflows
5. Submit a pull request with detailed examples

## License

This project is licensed under the MIT License - see the LICENSE file for details."#;

/// Substitute the rendered structure into the header, wrapped in a fenced
/// code block.
#[must_use]
pub fn render_header(structure: &str) -> String {
    HEADER.replace(STRUCTURE_PLACEHOLDER, &format!("```\n{structure}\n```"))
}
