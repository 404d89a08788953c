//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route.

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{CalculateTool, FactorialTool, GcdTool, LcmTool, ListOperationsTool};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>() -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(CalculateTool::create_route())
        .with_route(FactorialTool::create_route())
        .with_route(GcdTool::create_route())
        .with_route(LcmTool::create_route())
        .with_route(ListOperationsTool::create_route())
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;

    struct TestServer {}

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router();
        let tools = router.list_all();
        assert_eq!(tools.len(), 5);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"calculate"));
        assert!(names.contains(&"factorial"));
        assert!(names.contains(&"gcd"));
        assert!(names.contains(&"lcm"));
        assert!(names.contains(&"list_operations"));
    }

    #[test]
    fn test_registry_matches_router() {
        let registry_names = ToolRegistry::new().tool_names();

        let router: ToolRouter<TestServer> = build_tool_router();
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
