mod plugin_manager_tests;
