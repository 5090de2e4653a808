mod renamer_tests;
